//! Plumbing shared by the acceptance scorer and the demand forecaster:
//! environment configuration, the JSON error model and the actix-web
//! server bootstrap. Nothing in here knows about scoring.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, ErrorBody};
