use serde::{Deserialize, Serialize};

/// One observation; `ts` is opaque and never parsed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ForecastPoint {
    pub ts: String,
    pub y: i64,
}

/// History in chronological order plus the number of steps wanted.
/// Both fields are required.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub series: Vec<ForecastPoint>,
    pub horizon: i64,
}

impl ForecastRequest {
    /// Most recent count, 0 for an empty history.
    pub fn last_value(&self) -> i64 {
        self.series.last().map_or(0, |point| point.y)
    }

    /// Forecast length: `horizon`, or 0 if negative.
    pub fn steps(&self) -> usize {
        usize::try_from(self.horizon.max(0)).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ForecastResponse {
    pub forecast: Vec<i64>,
}
