use crate::inference::Scorer;
use crate::models::AcceptRequest;
use actix_web::{web, HttpResponse};
use log::debug;
use std::sync::Arc;

pub async fn predict(
    scorer: web::Data<Arc<dyn Scorer>>,
    body: web::Json<AcceptRequest>,
) -> HttpResponse {
    let request = body.into_inner();
    let response = scorer.predict(&request);
    debug!(
        "{} scored trip ({:.1} km, hour {}): probAccept={:.3}, {} points",
        scorer.name(),
        request.distance_km,
        request.hour_of_day,
        response.prob_accept,
        response.series.len()
    );
    HttpResponse::Ok().json(response)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/predict").route(web::post().to(predict)));
}
