//! VWAP 리포트 출력
//!
//! 텍스트 형식: `HH:00:00  SYMBOL       VWAP` (공백 2칸, 7칸)

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::VwapError;
use crate::models::bucket::VwapRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    timestamp: &'a str,
    symbol: &'a str,
    vwap: String,
}

/// 리포트 한 줄 (개행 포함)
pub fn format_row(row: &VwapRow) -> String {
    format!("{}  {}       {:.2}\n", row.hour_label, row.symbol, row.vwap)
}

pub fn write_text<W: Write>(rows: &[VwapRow], mut writer: W) -> Result<(), VwapError> {
    for row in rows {
        writer.write_all(format_row(row).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(rows: &[VwapRow], writer: W) -> Result<(), VwapError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(CsvRow {
            timestamp: &row.hour_label,
            symbol: &row.symbol,
            vwap: format!("{:.2}", row.vwap),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// 설정된 경로와 형식으로 리포트 파일 생성
pub fn write_report(rows: &[VwapRow], output: &OutputConfig) -> Result<(), VwapError> {
    let file = BufWriter::new(File::create(&output.path)?);

    match output.format {
        OutputFormat::Text => write_text(rows, file)?,
        OutputFormat::Csv => write_csv(rows, file)?,
    }

    log::info!("VWAP 결과 {}행 저장: {}", rows.len(), output.path);
    Ok(())
}
