//! VWAP 관련 테스트
//!
//! 디코더와 집계기를 공개 API 수준에서 검증

use std::io::Cursor;

use chrono::NaiveDate;
use rstest::rstest;
use itch_vwap::itch::codec::clean_symbol;
use itch_vwap::itch::decoder::{TRADE_MESSAGE_LEN, TRADE_MESSAGE_TAG};
use itch_vwap::{Aggregator, ClockMode, MessageDecoder, Pipeline, PipelineSettings, Trade};

fn record(raw_nanos: u64, symbol: &[u8; 8], shares: u32, raw_price: u32) -> Vec<u8> {
  let mut rec = vec![0u8; TRADE_MESSAGE_LEN];
  rec[4..10].copy_from_slice(&raw_nanos.to_be_bytes()[2..]);
  rec[19..23].copy_from_slice(&shares.to_be_bytes());
  rec[23..31].copy_from_slice(symbol);
  rec[31..35].copy_from_slice(&raw_price.to_be_bytes());
  rec
}

#[rstest]
#[case(0, b"A       ", 1, 1, 0, "A", 0.0001)]
#[case(9 * 3600 + 30 * 60, b"SPY     ", 500, 2_701_200, 9, "SPY", 270.12)]
#[case(23 * 3600 + 59 * 60 + 59, b"BRK B   ", 4_294_967_295, 4_294_967_295, 23, "BRKB", 429_496.7295)]
fn test_decode_round_trip(
  #[case] seconds: u64,
  #[case] symbol: &[u8; 8],
  #[case] shares: u32,
  #[case] raw_price: u32,
  #[case] hour: u32,
  #[case] clean: &str,
  #[case] price: f64,
) {
  let trade = MessageDecoder::new(ClockMode::Utc)
    .decode(&record(seconds * 1_000_000_000, symbol, shares, raw_price))
    .unwrap();

  assert_eq!(trade.hour(), hour);
  assert_eq!(trade.symbol(), clean);
  assert_eq!(trade.volume(), shares as u64);
  assert_eq!(trade.price(), price);
}

#[test]
fn test_clean_symbol_identity() {
  for symbol in ["AAPL", "GOOGL", "X", "BF.B"] {
    assert_eq!(clean_symbol(symbol.as_bytes()), symbol);
    assert_eq!(clean_symbol(clean_symbol(symbol.as_bytes()).as_bytes()), symbol);
  }
}

#[test]
fn test_aggregator_example_scenario() {
  let day = NaiveDate::from_ymd_opt(2019, 1, 30).unwrap();
  let mut agg = Aggregator::new();
  agg.add(&Trade::new(day.and_hms_opt(10, 15, 0).unwrap(), "AAPL", 100.0, 10));
  agg.add(&Trade::new(day.and_hms_opt(10, 45, 0).unwrap(), "AAPL", 200.0, 10));

  let rows = agg.finalize();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].hour_label, "10:00:00");
  assert_eq!(rows[0].symbol, "AAPL");
  assert_eq!(rows[0].vwap, 150.0);
}

#[test]
fn test_non_trade_bytes_are_not_dispatched() {
  let settings = PipelineSettings {
    clock: ClockMode::Utc,
    ..PipelineSettings::default()
  };

  // 'A' 태그 뒤에 43바이트 미만만 남은 스트림
  let feed = vec![b'A', 1, 2, 3, 4, 5];
  let outcome = Pipeline::new(settings).run(Cursor::new(feed)).unwrap();

  assert!(outcome.rows.is_empty());
  assert_eq!(outcome.stats.trades_decoded, 0);
  assert_eq!(outcome.stats.ignored_tags, 6);
}

#[test]
fn test_zero_volume_bucket_through_pipeline() {
  let mut feed = vec![TRADE_MESSAGE_TAG];
  feed.extend(record(3600 * 1_000_000_000, b"NIL     ", 0, 5_000_000));

  let settings = PipelineSettings {
    clock: ClockMode::Utc,
    ..PipelineSettings::default()
  };
  let outcome = Pipeline::new(settings).run(Cursor::new(feed)).unwrap();

  assert_eq!(outcome.rows.len(), 1);
  assert_eq!(outcome.rows[0].hour_label, "01:00:00");
  assert_eq!(outcome.rows[0].vwap, 0.0);
}
