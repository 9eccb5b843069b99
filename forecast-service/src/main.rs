use forecast_service::server::{ForecastConfig, ForecastServer, DEFAULT_PORT, MODEL_VAR};
use log::error;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    service_kit::logging::init();

    let config = ForecastConfig::from_env(DEFAULT_PORT, MODEL_VAR)
        .inspect_err(|e| error!("Invalid configuration: {}", e))?;

    ForecastServer::from_config(config)
        .run()
        .await
        .inspect_err(|e| error!("{:#}", e))
}
