use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// 디코딩된 체결('P') 메시지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    timestamp: NaiveDateTime,
    symbol: String,
    price: f64,
    volume: u64,
}

impl Trade {
    pub fn new(
        timestamp: NaiveDateTime,
        symbol: impl Into<String>,
        price: f64,
        volume: u64,
    ) -> Self {
        Trade {
            timestamp,
            symbol: symbol.into(),
            price,
            volume,
        }
    }

    /// 체결 시각 (벽시계 기준)
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// 집계 버킷에 사용되는 시(0~23)
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// 거래 대금 (가격 * 수량)
    pub fn notional(&self) -> f64 {
        self.price * self.volume as f64
    }
}
