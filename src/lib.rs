//! ITCH 체결 피드 VWAP 리포트 라이브러리
//!
//! gzip 압축된 바이너리 피드에서 체결('P') 메시지를 읽어 시간대/심볼별 VWAP을 계산합니다.

pub mod config;
pub mod core;
pub mod error;
pub mod feed;
pub mod itch;
pub mod models;
pub mod report;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::VwapError;
pub use crate::config::Config;
pub use crate::core::{Aggregator, Pipeline, PipelineOutcome, PipelineSettings, PipelineStats};
pub use crate::itch::{ClockMode, FramingMode, MessageDecoder};
pub use crate::models::bucket::{BucketAccumulator, BucketKey, VwapRow};
pub use crate::models::trade::Trade;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, VwapError>;

/// 설정에 따라 피드 파일을 처리하고 리포트를 기록
pub fn run(config: &Config) -> Result<PipelineOutcome> {
    let reader = feed::FeedReader::new(&config.feed.input_path, config.feed.compression).open()?;
    let outcome = Pipeline::new(PipelineSettings::from(config)).run(reader)?;

    utils::logging::log_run_summary(&outcome.stats);
    report::write_report(&outcome.rows, &config.output)?;

    Ok(outcome)
}
