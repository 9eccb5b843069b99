//! Server configuration read once from environment variables at startup.

use crate::error::ConfigError;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

/// Bind address, worker pool and model selection for one service.
///
/// `M` is the service's model selector; it is parsed from the variable
/// named by the caller (`ACCEPT_MODEL`, `FORECAST_MODEL`) and falls back
/// to `M::default()` when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig<M> {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub json_limit: usize,
    /// `None` disables CORS.
    pub cors_origins: Option<Vec<String>>,
    pub model: M,
}

impl<M> ServerConfig<M>
where
    M: FromStr<Err = ConfigError> + Default,
{
    pub fn from_env(default_port: u16, model_var: &'static str) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, model_var, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(
        default_port: u16,
        model_var: &'static str,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", default_port)?;

        let workers = parse_or(&lookup, "WORKERS", num_cpus::get())?;
        if workers == 0 {
            return Err(ConfigError::Invalid {
                key: "WORKERS",
                value: "0".to_string(),
                reason: "at least one worker is required".to_string(),
            });
        }

        let json_limit = parse_or(&lookup, "JSON_LIMIT", DEFAULT_JSON_LIMIT)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let model = match lookup(model_var) {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse()?,
            _ => M::default(),
        };

        Ok(Self {
            host,
            port,
            workers,
            json_limit,
            cors_origins,
            model,
        })
    }
}

impl<M> ServerConfig<M> {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: err.to_string(),
        }),
    }
}
