//! ITCH 필드 변환
//!
//! 심볼 정리, 타임스탬프/가격 변환 등 순수 함수 모음

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// 가격 필드의 암묵적 소수 자릿수 (소수점 4자리)
pub const PRICE_SCALE: f64 = 10_000.0;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// 시 단위 버킷을 계산할 때 사용하는 벽시계 기준
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// 호스트 기본 타임존
    #[default]
    Local,
    Utc,
}

/// 심볼 필드 정리
///
/// 출력 가능한 ASCII(0x20~0x7E)만 남기고, 끝의 NUL/공백을 제거한 뒤
/// 내부 공백까지 모두 제거한다. 남은 바이트는 Latin-1로 해석하므로 실패하지 않는다.
pub fn clean_symbol(raw: &[u8]) -> String {
    let printable: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| (0x20..=0x7E).contains(b))
        .collect();

    let mut end = printable.len();
    while end > 0 && printable[end - 1] == 0x00 {
        end -= 1;
    }
    while end > 0 && printable[end - 1] == b' ' {
        end -= 1;
    }

    printable[..end]
        .iter()
        .filter(|&&b| b != b' ')
        .map(|&b| char::from(b))
        .collect()
}

/// 자정 이후 나노초를 호스트 로컬 시각으로 변환
///
/// 원시 값을 epoch 기준 경과 시간으로 취급한다. 거래일에 대한 기준점은 두지 않는다.
pub fn convert_timestamp(raw_nanos: u64) -> DateTime<Local> {
    convert_timestamp_in(raw_nanos, &Local)
}

/// 지정한 타임존 기준으로 변환
pub fn convert_timestamp_in<Tz: TimeZone>(raw_nanos: u64, tz: &Tz) -> DateTime<Tz> {
    let secs = (raw_nanos / NANOS_PER_SECOND) as i64;
    let nanos = (raw_nanos % NANOS_PER_SECOND) as u32;

    DateTime::<Utc>::from_timestamp(secs, nanos)
        .unwrap_or_default()
        .with_timezone(tz)
}

/// 설정된 시계 기준의 벽시계 시각
pub fn wall_clock(raw_nanos: u64, clock: ClockMode) -> NaiveDateTime {
    match clock {
        ClockMode::Local => convert_timestamp(raw_nanos).naive_local(),
        ClockMode::Utc => convert_timestamp_in(raw_nanos, &Utc).naive_utc(),
    }
}

/// 4바이트 가격 정수를 실수 가격으로 변환
pub fn decode_price(raw: u32) -> f64 {
    f64::from(raw) / PRICE_SCALE
}

/// 빅엔디언 부호 없는 정수 (최대 8바이트)
pub fn decode_count(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8, "field wider than u64: {} bytes", bytes.len());
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
