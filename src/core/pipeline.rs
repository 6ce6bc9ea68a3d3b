//! 피드 처리 파이프라인
//!
//! 바이트 스트림에서 태그를 읽어 체결 메시지를 디코더로 넘기고
//! 집계 결과를 시간 라벨 순으로 정렬한다.
//! 기본 모드는 태그를 한 바이트씩 읽고, ITCH 5.0 모드는 메시지마다 2바이트 길이 접두어를 읽는다.

use std::io::{self, BufReader, ErrorKind, Read};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::aggregator::Aggregator;
use crate::error::VwapError;
use crate::itch::codec::ClockMode;
use crate::itch::decoder::{MessageDecoder, TRADE_MESSAGE_LEN, TRADE_MESSAGE_TAG};
use crate::itch::framing::{self, FramingMode, FRAME_PREFIX_LEN};
use crate::models::bucket::VwapRow;

/// 파이프라인 실행 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub framing: FramingMode,
    pub clock: ClockMode,
    /// 처리할 최대 체결 수 (None이면 제한 없음)
    pub max_trades: Option<u64>,
    /// 진행 로그 간격 (0이면 출력하지 않음)
    pub progress_interval: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        PipelineSettings {
            framing: FramingMode::Reference,
            clock: ClockMode::Local,
            max_trades: None,
            progress_interval: 1_000_000,
        }
    }
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        PipelineSettings {
            framing: config.feed.framing,
            clock: config.pipeline.clock,
            max_trades: config.pipeline.max_trades,
            progress_interval: config.pipeline.progress_interval,
        }
    }
}

/// 실행 통계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub tags_read: u64,
    pub trades_decoded: u64,
    pub ignored_tags: u64,
    pub skipped_bytes: u64,
    pub buckets: usize,
    pub truncated_by_cap: bool,
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub rows: Vec<VwapRow>,
    pub stats: PipelineStats,
}

pub struct Pipeline {
    settings: PipelineSettings,
    decoder: MessageDecoder,
}

impl Pipeline {
    pub fn new(settings: PipelineSettings) -> Self {
        Pipeline {
            decoder: MessageDecoder::new(settings.clock),
            settings,
        }
    }

    /// 스트림 끝까지 처리하고 정렬된 VWAP 행을 반환
    pub fn run<R: Read>(&self, reader: R) -> Result<PipelineOutcome, VwapError> {
        let mut reader = BufReader::new(reader);
        let mut aggregator = Aggregator::new();
        let mut stats = PipelineStats::default();
        let mut record = [0u8; TRADE_MESSAGE_LEN];

        log::info!(
            "피드 처리 시작: framing={:?}, clock={:?}, max_trades={:?}",
            self.settings.framing, self.settings.clock, self.settings.max_trades
        );

        loop {
            let tag = match self.next_tag(&mut reader)? {
                Some(tag) => tag,
                None => break,
            };

            // 다음 메시지가 남아 있을 때만 제한에 걸린 것으로 본다
            if let Some(cap) = self.settings.max_trades {
                if stats.trades_decoded >= cap {
                    log::warn!("최대 체결 수 도달: {}건에서 중단", cap);
                    stats.truncated_by_cap = true;
                    break;
                }
            }
            stats.tags_read += 1;

            if tag == TRADE_MESSAGE_TAG {
                let actual = read_full(&mut reader, &mut record)?;
                if actual < TRADE_MESSAGE_LEN {
                    return Err(VwapError::MalformedRecord {
                        expected: TRADE_MESSAGE_LEN,
                        actual,
                    });
                }

                let trade = self.decoder.decode(&record)?;
                aggregator.add(&trade);
                stats.trades_decoded += 1;

                if self.settings.progress_interval > 0
                    && stats.trades_decoded % self.settings.progress_interval == 0
                {
                    log::debug!(
                        "체결 {}건 처리, 버킷 {}개",
                        stats.trades_decoded,
                        aggregator.len()
                    );
                }
                continue;
            }

            stats.ignored_tags += 1;
            if self.settings.framing == FramingMode::Itch50 {
                stats.skipped_bytes += skip_payload(&mut reader, tag)?;
            }
        }

        stats.buckets = aggregator.len();
        let mut rows = aggregator.finalize();
        sort_rows(&mut rows);

        log::info!(
            "피드 처리 완료: 태그 {}개, 체결 {}건, 무시 {}개, 버킷 {}개",
            stats.tags_read, stats.trades_decoded, stats.ignored_tags, stats.buckets
        );

        Ok(PipelineOutcome { rows, stats })
    }

    /// 다음 메시지의 태그. ITCH 5.0 모드에서는 2바이트 길이 접두어를 먼저 읽고 검증한다.
    fn next_tag<R: Read>(&self, reader: &mut R) -> Result<Option<u8>, VwapError> {
        if self.settings.framing == FramingMode::Reference {
            return Ok(read_tag(reader)?);
        }

        let mut prefix = [0u8; FRAME_PREFIX_LEN];
        match read_full(reader, &mut prefix)? {
            0 => return Ok(None),
            FRAME_PREFIX_LEN => {}
            actual => {
                return Err(VwapError::TruncatedFrame {
                    expected: FRAME_PREFIX_LEN,
                    actual,
                })
            }
        }
        let declared = usize::from(u16::from_be_bytes(prefix));

        let tag = read_tag(reader)?.ok_or(VwapError::TruncatedFrame {
            expected: declared,
            actual: 0,
        })?;
        let expected = framing::itch50_payload_len(tag).ok_or(VwapError::UnknownMessageType(tag))? + 1;
        if declared != expected {
            return Err(VwapError::FrameLengthMismatch { tag, declared, expected });
        }

        Ok(Some(tag))
    }
}

/// 시간 라벨 오름차순, 같은 시간대는 심볼 순
pub fn sort_rows(rows: &mut [VwapRow]) {
    rows.sort_by(|a, b| {
        a.hour_label
            .cmp(&b.hour_label)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
}

fn read_tag<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut tag = [0u8; 1];
    Ok(match read_full(reader, &mut tag)? {
        0 => None,
        _ => Some(tag[0]),
    })
}

/// 버퍼를 채울 때까지 읽고 실제로 읽은 바이트 수를 반환 (EOF면 더 적을 수 있음)
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn skip_payload<R: Read>(reader: &mut R, tag: u8) -> Result<u64, VwapError> {
    let expected = framing::itch50_payload_len(tag).ok_or(VwapError::UnknownMessageType(tag))?;

    let skipped = io::copy(&mut reader.by_ref().take(expected as u64), &mut io::sink())?;
    if skipped < expected as u64 {
        return Err(VwapError::TruncatedMessage {
            tag,
            expected,
            actual: skipped as usize,
        });
    }

    Ok(skipped)
}
