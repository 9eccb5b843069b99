//! Ride acceptance scoring service.
//!
//! `POST /predict` takes trip attributes and answers with the probability
//! that a captain accepts the ride, plus a short sparkline of how that
//! probability is expected to drift.

pub mod inference;
pub mod models;
pub mod routes;
pub mod server;
