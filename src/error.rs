/**
* filename : error
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VwapError {
    #[error("Malformed record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },

    #[error("Truncated message '{}': expected {expected} bytes, got {actual}", tag_char(.tag))]
    TruncatedMessage { tag: u8, expected: usize, actual: usize },

    #[error("Truncated frame: expected {expected} bytes, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },

    #[error("Frame length mismatch for '{}': declared {declared}, expected {expected}", tag_char(.tag))]
    FrameLengthMismatch { tag: u8, declared: usize, expected: usize },

    #[error("Unknown message type: 0x{0:02X}")]
    UnknownMessageType(u8),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

fn tag_char(tag: &u8) -> char {
    char::from(*tag)
}
