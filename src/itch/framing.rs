//! 비체결 메시지 처리 방식
//!
//! 기본값(`Reference`)은 'P' 이외의 태그를 한 바이트씩 소비할 뿐 본문을 건너뛰지 않는다.
//! 다른 메시지가 섞인 피드에서는 커서가 어긋날 수 있다.
//! `Itch50`은 NASDAQ TotalView-ITCH 5.0 파일 형식을 따른다. 메시지마다 2바이트 빅엔디언
//! 길이 접두어(태그 포함)가 붙고, 접두어는 아래 길이 테이블과 일치해야 한다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramingMode {
    #[default]
    Reference,
    Itch50,
}

/// ITCH 5.0 파일의 메시지 길이 접두어 크기
pub const FRAME_PREFIX_LEN: usize = 2;

/// 태그 바이트를 제외한 ITCH 5.0 메시지 본문 길이
pub fn itch50_payload_len(tag: u8) -> Option<usize> {
    let len = match tag {
        b'S' => 11, // system event
        b'R' => 38, // stock directory
        b'H' => 24, // trading action
        b'Y' => 19, // reg SHO
        b'L' => 25, // market participant position
        b'V' => 34, // MWCB decline level
        b'W' => 11, // MWCB status
        b'K' => 27, // IPO quoting period
        b'J' => 34, // LULD auction collar
        b'h' => 20, // operational halt
        b'A' => 35,
        b'F' => 39,
        b'E' => 30,
        b'C' => 35,
        b'X' => 22,
        b'D' => 18,
        b'U' => 34,
        b'P' => 43,
        b'Q' => 39, // cross trade
        b'B' => 18, // broken trade
        b'I' => 49, // NOII
        b'N' => 19, // RPII
        b'O' => 47, // direct listing with capital raise
        _ => return None,
    };
    Some(len)
}
