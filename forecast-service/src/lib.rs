//! Pickup demand forecasting service: `POST /forecast` extends a series of
//! bucketed pickup counts by `horizon` steps.

pub mod inference;
pub mod routes;
pub mod server;
pub mod types;
