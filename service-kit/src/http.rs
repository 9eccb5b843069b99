//! actix-web wiring common to both services.

use crate::config::ServerConfig;
use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{Condition, DefaultHeaders, Logger};
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use log::warn;

/// JSON extractor settings: size limit plus the mapping from payload errors
/// to 400/422 responses.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            warn!("rejected body on {} {}: {}", req.method(), req.path(), err);
            ApiError::from(err).into()
        })
}

/// CORS for the listed origins only. `None` leaves the layer off, so no
/// `Access-Control-*` headers are ever sent.
pub fn cors(origins: Option<&[String]>) -> Condition<Cors> {
    let cors = Cors::default()
        .allowed_methods(vec!["POST"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);
    let cors = origins
        .unwrap_or_default()
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin));

    Condition::new(origins.is_some(), cors)
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Binds `config`'s address and serves until shutdown. `configure` registers
/// the service's state and routes on every worker's `App`.
pub async fn serve<M, F>(config: &ServerConfig<M>, configure: F) -> anyhow::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let bind_address = config.bind_address();
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(cors(cors_origins.as_deref()))
            .configure(configure.clone())
    })
    .workers(config.workers)
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?
    .run()
    .await
    .context("HTTP server stopped with an error")
}
