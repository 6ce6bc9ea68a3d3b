//! 시간대별 VWAP 집계기
//!
//! (시, 심볼) 키마다 거래 대금과 거래량을 누적하고 종료 시 VWAP 행을 생성

use std::collections::HashMap;

use crate::models::bucket::{BucketAccumulator, BucketKey, VwapRow};
use crate::models::trade::Trade;
use crate::utils::math;

/// VWAP 집계기. 한 번의 실행 동안만 상태를 소유한다.
#[derive(Debug, Default)]
pub struct Aggregator {
  buckets: HashMap<BucketKey, BucketAccumulator>,
  trade_count: u64,
}

impl Aggregator {
  pub fn new() -> Self {
    Self::default()
  }

  /// 체결 한 건 반영
  pub fn add(&mut self, trade: &Trade) {
    let key = BucketKey::new(trade.hour(), trade.symbol());
    self.buckets
      .entry(key)
      .or_default()
      .record(trade.price(), trade.volume());
    self.trade_count += 1;
  }

  /// 지금까지 생성된 버킷 수
  pub fn len(&self) -> usize {
    self.buckets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buckets.is_empty()
  }

  pub fn trade_count(&self) -> u64 {
    self.trade_count
  }

  /// 현재 누적 상태 조회
  pub fn bucket(&self, hour: u32, symbol: &str) -> Option<&BucketAccumulator> {
    self.buckets.get(&BucketKey::new(hour, symbol))
  }

  /// 누적 결과를 VWAP 행으로 변환. 정렬은 호출자가 담당한다.
  pub fn finalize(self) -> Vec<VwapRow> {
    self.buckets
      .into_iter()
      .map(|(key, acc)| VwapRow {
        hour_label: key.hour_label(),
        symbol: key.symbol,
        vwap: math::round_price(acc.vwap()),
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{NaiveDate, NaiveDateTime};
  use rand::Rng;

  fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 1, 1)
      .unwrap()
      .and_hms_opt(hour, minute, 0)
      .unwrap()
  }

  fn find<'a>(rows: &'a [VwapRow], label: &str, symbol: &str) -> &'a VwapRow {
    rows.iter()
      .find(|r| r.hour_label == label && r.symbol == symbol)
      .unwrap_or_else(|| panic!("missing row {} {}", label, symbol))
  }

  #[test]
  fn test_same_hour_trades_are_weighted() {
    let mut agg = Aggregator::new();
    agg.add(&Trade::new(at(10, 15), "AAPL", 100.0, 10));
    agg.add(&Trade::new(at(10, 45), "AAPL", 200.0, 10));

    assert_eq!(agg.len(), 1);
    assert_eq!(agg.trade_count(), 2);

    let rows = agg.finalize();
    assert_eq!(rows.len(), 1);
    assert_eq!(find(&rows, "10:00:00", "AAPL").vwap, 150.0);
  }

  #[test]
  fn test_buckets_split_by_hour_and_symbol() {
    let mut agg = Aggregator::new();
    agg.add(&Trade::new(at(9, 59), "AAPL", 10.0, 1));
    agg.add(&Trade::new(at(10, 0), "AAPL", 20.0, 1));
    agg.add(&Trade::new(at(10, 30), "MSFT", 30.0, 3));

    let acc = agg.bucket(10, "MSFT").unwrap();
    assert_eq!(acc.volume_sum, 3);
    assert!(agg.bucket(9, "MSFT").is_none());

    let rows = agg.finalize();
    assert_eq!(rows.len(), 3);
    assert_eq!(find(&rows, "09:00:00", "AAPL").vwap, 10.0);
    assert_eq!(find(&rows, "10:00:00", "AAPL").vwap, 20.0);
    assert_eq!(find(&rows, "10:00:00", "MSFT").vwap, 30.0);
  }

  #[test]
  fn test_zero_volume_only_bucket_is_zero() {
    let mut agg = Aggregator::new();
    agg.add(&Trade::new(at(11, 0), "ZERO", 55.55, 0));

    let rows = agg.finalize();
    assert_eq!(find(&rows, "11:00:00", "ZERO").vwap, 0.0);
  }

  #[test]
  fn test_zero_volume_trade_carries_no_weight() {
    let mut agg = Aggregator::new();
    agg.add(&Trade::new(at(11, 0), "MIX", 999.0, 0));
    agg.add(&Trade::new(at(11, 5), "MIX", 12.5, 4));
    agg.add(&Trade::new(at(11, 10), "MIX", 13.5, 4));

    let rows = agg.finalize();
    assert_eq!(find(&rows, "11:00:00", "MIX").vwap, 13.0);
  }

  #[test]
  fn test_vwap_is_rounded_to_cents() {
    let mut agg = Aggregator::new();
    agg.add(&Trade::new(at(12, 0), "RND", 10.0, 1));
    agg.add(&Trade::new(at(12, 0), "RND", 10.01, 2));

    // 30.02 / 3 = 10.00666...
    let rows = agg.finalize();
    assert_eq!(find(&rows, "12:00:00", "RND").vwap, 10.01);
  }

  #[test]
  fn test_random_trades_match_direct_formula() {
    let mut rng = rand::thread_rng();
    let symbols = ["AAPL", "MSFT", "QQQ"];
    let mut trades = Vec::new();

    for _ in 0..500 {
      let hour = rng.gen_range(0..24);
      let symbol = symbols[rng.gen_range(0..symbols.len())];
      let price = rng.gen_range(1..2_000_000u32) as f64 / 10_000.0;
      let volume = rng.gen_range(0..5_000u64);
      trades.push(Trade::new(at(hour, rng.gen_range(0..60)), symbol, price, volume));
    }

    let mut agg = Aggregator::new();
    for trade in &trades {
      agg.add(trade);
    }

    for row in agg.finalize() {
      let matching: Vec<&Trade> = trades.iter()
        .filter(|t| format!("{:02}:00:00", t.hour()) == row.hour_label && t.symbol() == row.symbol)
        .collect();
      assert!(!matching.is_empty());

      let notional: f64 = matching.iter().map(|t| t.notional()).sum();
      let volume: u64 = matching.iter().map(|t| t.volume()).sum();
      let expected = if volume == 0 { 0.0 } else { notional / volume as f64 };

      assert_eq!(
        row.vwap, math::round_price(expected),
        "{} {}: raw vwap {}", row.hour_label, row.symbol, expected
      );
    }
  }
}
