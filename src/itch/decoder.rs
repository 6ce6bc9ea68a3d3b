/**
* filename : decoder
* author : HAMA
* date: 2025. 5. 14.
* description: 체결('P') 메시지 디코더
**/

use std::ops::Range;

use crate::error::VwapError;
use crate::itch::codec::{self, ClockMode};
use crate::models::trade::Trade;

/// 체결 메시지 태그
pub const TRADE_MESSAGE_TAG: u8 = b'P';
/// 태그 이후 체결 메시지 본문 길이
pub const TRADE_MESSAGE_LEN: usize = 43;

// 필드 오프셋 (빅엔디언)
// 0..2 stock locate, 2..4 tracking number, 10..18 order reference,
// 18 buy/sell indicator, 35..43 match number 는 사용하지 않음
const TIMESTAMP: Range<usize> = 4..10;
const SHARES: Range<usize> = 19..23;
const STOCK: Range<usize> = 23..31;
const PRICE: Range<usize> = 31..35;

#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDecoder {
    clock: ClockMode,
}

impl MessageDecoder {
    pub fn new(clock: ClockMode) -> Self {
        MessageDecoder { clock }
    }

    /// 43바이트 레코드를 `Trade`로 디코딩
    pub fn decode(&self, record: &[u8]) -> Result<Trade, VwapError> {
        if record.len() != TRADE_MESSAGE_LEN {
            return Err(VwapError::MalformedRecord {
                expected: TRADE_MESSAGE_LEN,
                actual: record.len(),
            });
        }

        let raw_timestamp = codec::decode_count(&record[TIMESTAMP]);
        let shares = codec::decode_count(&record[SHARES]);
        let symbol = codec::clean_symbol(&record[STOCK]);
        let raw_price = codec::decode_count(&record[PRICE]) as u32;

        Ok(Trade::new(
            codec::wall_clock(raw_timestamp, self.clock),
            symbol,
            codec::decode_price(raw_price),
            shares,
        ))
    }
}
