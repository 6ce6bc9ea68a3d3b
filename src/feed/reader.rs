use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;
use serde::{Deserialize, Serialize};

use crate::error::VwapError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Gzip,
    None,
}

/// 압축 해제된 바이트 스트림을 제공하는 피드 파일
pub struct FeedReader {
    path: PathBuf,
    compression: Compression,
}

impl FeedReader {
    pub fn new(path: impl Into<PathBuf>, compression: Compression) -> Self {
        Self {
            path: path.into(),
            compression,
        }
    }

    /// 파일을 열어 읽기 스트림 반환. gzip은 멀티 멤버 파일도 이어서 읽는다.
    pub fn open(&self) -> Result<Box<dyn Read>, VwapError> {
        let file = File::open(&self.path)?;
        log::info!("피드 파일 열기: {} ({:?})", self.path.display(), self.compression);

        let reader: Box<dyn Read> = match self.compression {
            Compression::Gzip => Box::new(MultiGzDecoder::new(BufReader::new(file))),
            Compression::None => Box::new(file),
        };
        Ok(reader)
    }
}
