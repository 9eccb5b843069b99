use serde::{Deserialize, Serialize};

/// Trip attributes sent by the ride backend. Every field is optional on the
/// wire; missing ones take the values in [`AcceptRequest::default`].
///
/// `pickup`, `destination`, `duration_min`, `fare` and `vehicle_type` do not
/// affect the current scorers. They are carried so a learned model can use
/// them without a contract change.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AcceptRequest {
    pub pickup: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_min: f64,
    pub fare: f64,
    pub vehicle_type: String,
    pub hour_of_day: i64,
    pub user_rating: f64,
    pub captain_rating: f64,
    pub horizon: i64,
}

impl Default for AcceptRequest {
    fn default() -> Self {
        AcceptRequest {
            pickup: String::new(),
            destination: String::new(),
            distance_km: 0.0,
            duration_min: 0.0,
            fare: 0.0,
            vehicle_type: "Auto".to_string(),
            hour_of_day: 12,
            user_rating: 4.5,
            captain_rating: 4.5,
            horizon: 6,
        }
    }
}

impl AcceptRequest {
    /// Sparkline length: `horizon`, but never fewer than one.
    pub fn steps(&self) -> usize {
        usize::try_from(self.horizon.max(1)).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcceptResponse {
    pub prob_accept: f64,
    pub series: Vec<f64>,
}
