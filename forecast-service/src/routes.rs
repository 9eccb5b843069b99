use crate::inference::Forecaster;
use crate::types::ForecastRequest;
use actix_web::{web, HttpResponse};
use log::debug;
use std::sync::Arc;

pub async fn forecast(
    model: web::Data<Arc<dyn Forecaster>>,
    input: web::Json<ForecastRequest>,
) -> HttpResponse {
    let request = input.into_inner();
    let output = model.forecast(&request);
    debug!(
        "{} forecast {} steps from {} points (last={})",
        model.name(),
        output.forecast.len(),
        request.series.len(),
        request.last_value()
    );
    HttpResponse::Ok().json(output)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/forecast").route(web::post().to(forecast)));
}
