use crate::types::{ForecastRequest, ForecastResponse};
use service_kit::ConfigError;
use std::str::FromStr;
use std::sync::Arc;

/// Turns recent pickup counts into a short-term forecast.
///
/// Implementations must return exactly `request.steps()` non-negative
/// counts. Served behind `Arc<dyn Forecaster>`.
pub trait Forecaster: Send + Sync {
    fn name(&self) -> &'static str;

    fn forecast(&self, request: &ForecastRequest) -> ForecastResponse;
}

/// Linear ramp up from the last observed count.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrendForecaster;

impl Forecaster for TrendForecaster {
    fn name(&self) -> &'static str {
        "trend"
    }

    fn forecast(&self, request: &ForecastRequest) -> ForecastResponse {
        let last = request.last_value();
        let forecast = (1..=request.steps() as i64)
            .map(|ahead| last.saturating_add(ahead).max(0))
            .collect();

        ForecastResponse { forecast }
    }
}

/// Flat forecast at the mean of the trailing `window` counts.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverageForecaster {
    window: usize,
}

impl MovingAverageForecaster {
    pub const DEFAULT_WINDOW: usize = 6;

    pub fn new(window: usize) -> Self {
        MovingAverageForecaster {
            window: window.max(1),
        }
    }

    pub fn level(&self, request: &ForecastRequest) -> i64 {
        let series = &request.series;
        let tail = &series[series.len().saturating_sub(self.window)..];
        if tail.is_empty() {
            return 0;
        }
        let mean = tail.iter().map(|point| point.y as f64).sum::<f64>() / tail.len() as f64;
        mean.round().max(0.0) as i64
    }
}

impl Default for MovingAverageForecaster {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Forecaster for MovingAverageForecaster {
    fn name(&self) -> &'static str {
        "moving-average"
    }

    fn forecast(&self, request: &ForecastRequest) -> ForecastResponse {
        ForecastResponse {
            forecast: vec![self.level(request); request.steps()],
        }
    }
}

/// Forecaster selected by `FORECAST_MODEL`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ForecasterKind {
    #[default]
    Trend,
    MovingAverage,
}

impl ForecasterKind {
    pub fn build(self) -> Arc<dyn Forecaster> {
        match self {
            ForecasterKind::Trend => Arc::new(TrendForecaster),
            ForecasterKind::MovingAverage => Arc::new(MovingAverageForecaster::default()),
        }
    }
}

impl FromStr for ForecasterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trend" => Ok(ForecasterKind::Trend),
            "moving-average" | "moving_average" => Ok(ForecasterKind::MovingAverage),
            _ => Err(ConfigError::UnknownModel {
                value: s.to_string(),
                expected: "trend, moving-average",
            }),
        }
    }
}
