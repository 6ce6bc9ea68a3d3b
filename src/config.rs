/**
* filename : config
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::VwapError;
use crate::feed::reader::Compression;
use crate::itch::codec::ClockMode;
use crate::itch::framing::FramingMode;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub input_path: String,
    pub compression: Compression,
    pub framing: FramingMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub max_trades: Option<u64>,
    pub clock: ClockMode,
    pub progress_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from config.json in the working directory
    pub fn load() -> Result<Self, VwapError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self, VwapError> {
        let mut cfg = if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| VwapError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| VwapError::ConfigError(format!("Failed to read config file: {}", e)))?;

            serde_json::from_str::<Config>(&contents)
                .map_err(|e| VwapError::ConfigError(format!("Failed to parse config file: {}", e)))?
        } else {
            Config::default()
        };

        // environment overrides
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) -> Result<(), VwapError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), VwapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get("VWAP_INPUT") { self.feed.input_path = v; }
        if let Some(v) = get("VWAP_OUTPUT") { self.output.path = v; }
        if let Some(v) = get("VWAP_MAX_TRADES") {
            let cap = v.parse::<u64>()
                .map_err(|e| VwapError::ConfigError(format!("Invalid VWAP_MAX_TRADES '{}': {}", v, e)))?;
            self.pipeline.max_trades = Some(cap);
        }
        if let Some(v) = get("VWAP_CLOCK") { self.pipeline.clock = parse_enum("VWAP_CLOCK", &v)?; }
        if let Some(v) = get("VWAP_FORMAT") { self.output.format = parse_enum("VWAP_FORMAT", &v)?; }
        if let Some(v) = get("VWAP_FRAMING") { self.feed.framing = parse_enum("VWAP_FRAMING", &v)?; }
        if let Some(v) = get("VWAP_COMPRESSION") { self.feed.compression = parse_enum("VWAP_COMPRESSION", &v)?; }

        Ok(())
    }
}

/// 소문자 enum 이름을 serde 표현 그대로 파싱
fn parse_enum<T: serde::de::DeserializeOwned>(key: &str, value: &str) -> Result<T, VwapError> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|e| VwapError::ConfigError(format!("Invalid {} '{}': {}", key, value, e)))
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            input_path: "01302019.NASDAQ_ITCH50.gz".to_string(),
            compression: Compression::Gzip,
            framing: FramingMode::Reference,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            max_trades: None,
            clock: ClockMode::Local,
            progress_interval: 1_000_000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: "vwap_output.txt".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}
