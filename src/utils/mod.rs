//! 공용 유틸리티
//!
//! 로깅 초기화와 가격 반올림

pub mod logging;
pub mod math;
