use serde::{Deserialize, Serialize};

/// 집계 키: (시, 심볼)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BucketKey {
    pub hour: u32,
    pub symbol: String,
}

impl BucketKey {
    pub fn new(hour: u32, symbol: impl Into<String>) -> Self {
        BucketKey {
            hour,
            symbol: symbol.into(),
        }
    }

    /// "HH:00:00" 형식의 시간 라벨
    pub fn hour_label(&self) -> String {
        format!("{:02}:00:00", self.hour)
    }
}

/// 버킷별 누적 합계. `Default`가 0 상태를 나타낸다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketAccumulator {
    pub notional_sum: f64,
    pub volume_sum: u64,
}

impl BucketAccumulator {
    pub fn record(&mut self, price: f64, volume: u64) {
        self.notional_sum += price * volume as f64;
        self.volume_sum += volume;
    }

    /// 거래량이 0이면 0을 반환
    pub fn vwap(&self) -> f64 {
        if self.volume_sum == 0 {
            return 0.0;
        }

        self.notional_sum / self.volume_sum as f64
    }
}

/// 최종 리포트 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VwapRow {
    pub hour_label: String,
    pub symbol: String,
    pub vwap: f64,
}
