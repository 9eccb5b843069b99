use crate::inference::{Forecaster, ForecasterKind};
use crate::routes;
use actix_web::web;
use log::info;
use service_kit::{http, ServerConfig};
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 8000;
pub const MODEL_VAR: &str = "FORECAST_MODEL";

pub type ForecastConfig = ServerConfig<ForecasterKind>;

#[derive(Clone)]
pub struct ForecastServer {
    config: ForecastConfig,
    model: Arc<dyn Forecaster>,
}

impl ForecastServer {
    pub fn new(config: ForecastConfig, model: Arc<dyn Forecaster>) -> Self {
        ForecastServer { config, model }
    }

    pub fn from_config(config: ForecastConfig) -> Self {
        let model = config.model.build();
        Self::new(config, model)
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(Arc::clone(&self.model)))
            .app_data(http::json_config(self.config.json_limit));
        routes::configure(cfg);
        cfg.default_service(web::to(http::not_found));
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!(
            "Demand forecaster listening on http://{}",
            self.config.bind_address()
        );
        info!(
            "Workers: {}, model: {}",
            self.config.workers,
            self.model.name()
        );
        info!("   POST /forecast - pickup count forecast");

        let server = self.clone();
        http::serve(&self.config, move |cfg| server.configure(cfg)).await
    }
}
