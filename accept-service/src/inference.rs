use crate::models::{AcceptRequest, AcceptResponse};
use service_kit::ConfigError;
use std::iter;
use std::str::FromStr;
use std::sync::Arc;

/// Estimates how likely a captain is to accept a trip.
///
/// The HTTP layer only ever sees `Arc<dyn Scorer>`, so a learned model can
/// replace the arithmetic scorers below without touching routing.
/// Implementations must keep `prob_accept` and every `series` value within
/// `0.0..=1.0`, emit exactly `request.steps()` points and start the series
/// at `prob_accept`.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    fn predict(&self, request: &AcceptRequest) -> AcceptResponse;
}

/// Clamp to the unit interval. NaN becomes 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn is_rush_hour(hour: i64) -> bool {
    (18..=21).contains(&hour)
}

/// Stand-in formula: short trips and good ratings help, evening rush hurts.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderScorer;

impl PlaceholderScorer {
    const BASE: f64 = 0.65;
    const STEP: f64 = 0.02;

    pub fn probability(request: &AcceptRequest) -> f64 {
        let short_boost = if request.distance_km < 5.0 {
            0.15
        } else if request.distance_km < 10.0 {
            0.05
        } else {
            -0.05
        };
        let rush_penalty = if is_rush_hour(request.hour_of_day) {
            -0.1
        } else {
            0.0
        };
        let rating_adj =
            (request.captain_rating - 4.0) * 0.05 + (request.user_rating - 4.0) * 0.03;

        clamp_unit(Self::BASE + short_boost + rush_penalty + rating_adj)
    }
}

impl Scorer for PlaceholderScorer {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn predict(&self, request: &AcceptRequest) -> AcceptResponse {
        let prob = Self::probability(request);
        // Drift up from low scores, down from high ones.
        let step = if prob < 0.8 { Self::STEP } else { -Self::STEP };
        let series = iter::successors(Some(prob), |value| Some(value + step))
            .take(request.steps())
            .map(clamp_unit)
            .collect();

        AcceptResponse {
            prob_accept: prob,
            series,
        }
    }
}

/// The ride backend's offline fallback rule, servable on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    const BASE: f64 = 0.6;
    const DECAY: f64 = 0.02;

    pub fn probability(request: &AcceptRequest) -> f64 {
        let short_trip_boost = if request.distance_km < 5.0 { 0.15 } else { 0.0 };
        let rush_penalty = if is_rush_hour(request.hour_of_day) {
            -0.08
        } else {
            0.0
        };
        let rating_adj =
            ((request.captain_rating - 4.5) + (request.user_rating - 4.5)) * 0.05;

        clamp_unit(Self::BASE + short_trip_boost + rush_penalty + rating_adj)
    }
}

impl Scorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn predict(&self, request: &AcceptRequest) -> AcceptResponse {
        let prob = Self::probability(request);
        let series = (0..request.steps())
            .map(|i| clamp_unit(prob - Self::DECAY * i as f64))
            .collect();

        AcceptResponse {
            prob_accept: prob,
            series,
        }
    }
}

/// Scorer selected by `ACCEPT_MODEL`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    #[default]
    Placeholder,
    Heuristic,
}

impl ScorerKind {
    pub fn build(self) -> Arc<dyn Scorer> {
        match self {
            ScorerKind::Placeholder => Arc::new(PlaceholderScorer),
            ScorerKind::Heuristic => Arc::new(HeuristicScorer),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "placeholder" => Ok(ScorerKind::Placeholder),
            "heuristic" => Ok(ScorerKind::Heuristic),
            _ => Err(ConfigError::UnknownModel {
                value: s.to_string(),
                expected: "placeholder, heuristic",
            }),
        }
    }
}
