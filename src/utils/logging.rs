//! 로깅 유틸리티
//!
//! 로그 초기화 및 실행 요약 로그 제공

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::core::pipeline::PipelineStats;
use crate::error::VwapError;

/// 레벨 문자열 파싱 (알 수 없는 값은 Info)
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 로깅 시스템 초기화. RUST_LOG가 설정되어 있으면 설정 파일 레벨보다 우선한다.
pub fn init(default_level: &str) -> Result<(), VwapError> {
    let mut builder = Builder::from_default_env();

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    builder
        .filter_level(parse_level(&log_level))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| VwapError::ConfigError(format!("Failed to initialize logger: {}", e)))?;

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

/// 실행 요약 로그
pub fn log_run_summary(stats: &PipelineStats) {
    log::info!(
        "실행 요약 - 태그: {} - 체결: {} - 무시된 태그: {} - 건너뛴 바이트: {} - 버킷: {}",
        stats.tags_read,
        stats.trades_decoded,
        stats.ignored_tags,
        stats.skipped_bytes,
        stats.buckets
    );
    if stats.truncated_by_cap {
        log::warn!("체결 수 제한으로 피드 일부만 처리됨");
    }
}

/// 오류 로그
pub fn log_error(context: &str, error: &VwapError) {
    log::error!("오류 발생 - {}: {}", context, error);
}
