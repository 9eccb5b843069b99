use accept_service::server::{AcceptConfig, AcceptServer, DEFAULT_PORT, MODEL_VAR};
use log::error;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    service_kit::logging::init();

    let config = AcceptConfig::from_env(DEFAULT_PORT, MODEL_VAR)
        .inspect_err(|e| error!("Invalid configuration: {}", e))?;

    AcceptServer::from_config(config)
        .run()
        .await
        .inspect_err(|e| error!("{:#}", e))
}
