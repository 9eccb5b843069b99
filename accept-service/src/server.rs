use crate::inference::{Scorer, ScorerKind};
use crate::routes;
use actix_web::web;
use log::info;
use service_kit::{http, ServerConfig};
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 8002;
pub const MODEL_VAR: &str = "ACCEPT_MODEL";

pub type AcceptConfig = ServerConfig<ScorerKind>;

/// One acceptance-scoring server: its configuration plus the scorer every
/// worker shares.
#[derive(Clone)]
pub struct AcceptServer {
    config: AcceptConfig,
    scorer: Arc<dyn Scorer>,
}

impl AcceptServer {
    pub fn new(config: AcceptConfig, scorer: Arc<dyn Scorer>) -> Self {
        AcceptServer { config, scorer }
    }

    /// Builds the scorer named by `config.model`.
    pub fn from_config(config: AcceptConfig) -> Self {
        let scorer = config.model.build();
        Self::new(config, scorer)
    }

    pub fn config(&self) -> &AcceptConfig {
        &self.config
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(Arc::clone(&self.scorer)))
            .app_data(http::json_config(self.config.json_limit));
        routes::configure(cfg);
        cfg.default_service(web::to(http::not_found));
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!(
            "Ride acceptance scorer listening on http://{}",
            self.config.bind_address()
        );
        info!(
            "Workers: {}, model: {}",
            self.config.workers,
            self.scorer.name()
        );
        info!("   POST /predict  - acceptance probability and sparkline");

        let server = self.clone();
        http::serve(&self.config, move |cfg| server.configure(cfg)).await
    }
}
