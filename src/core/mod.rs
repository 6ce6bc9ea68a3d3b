//! VWAP 계산의 핵심 구현체

pub mod aggregator;
pub mod pipeline;

pub use aggregator::Aggregator;
pub use pipeline::{Pipeline, PipelineOutcome, PipelineSettings, PipelineStats};
