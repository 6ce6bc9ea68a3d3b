//! 수학 관련 유틸리티
//!
//! 가격 반올림 함수 제공

use rust_decimal::prelude::*;

/// 소수점 `dp`자리 반올림 (round-half-to-even)
///
/// f64의 이진 값을 그대로 십진수로 옮긴 뒤 반올림하므로 2.675(실제 2.67499...)는 2.67이 된다.
/// Decimal 범위를 벗어나면 원래 값을 그대로 반환한다.
pub fn round_half_even(value: f64, dp: u32) -> f64 {
  Decimal::from_f64_retain(value)
    .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
    .map(|d| d.mantissa() as f64 / 10f64.powi(d.scale() as i32))
    .unwrap_or(value)
}

/// 가격을 센트 단위(소수점 2자리)로 반올림
pub fn round_price(price: f64) -> f64 {
  round_half_even(price, 2)
}
