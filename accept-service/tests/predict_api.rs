use accept_service::inference::{PlaceholderScorer, ScorerKind};
use accept_service::models::AcceptResponse;
use accept_service::server::{AcceptConfig, AcceptServer, DEFAULT_PORT, MODEL_VAR};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};
use service_kit::ErrorBody;
use std::sync::Arc;

fn config(model: Option<&str>) -> AcceptConfig {
    let model = model.map(str::to_string);
    AcceptConfig::from_lookup(DEFAULT_PORT, MODEL_VAR, |key| match key {
        MODEL_VAR => model.clone(),
        _ => None,
    })
    .expect("defaults are valid")
}

macro_rules! app {
    ($server:expr) => {{
        let server: AcceptServer = $server;
        test::init_service(App::new().configure(|cfg| server.configure(cfg))).await
    }};
}

fn predict(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/predict").set_json(body)
}

#[actix_web::test]
async fn short_trip_off_peak_scores_point_eight() {
    let app = app!(AcceptServer::from_config(config(None)));

    let resp: AcceptResponse = test::call_and_read_body_json(
        &app,
        predict(json!({
            "pickup": "Central Station",
            "destination": "Airport",
            "distanceKm": 3.2,
            "durationMin": 11.0,
            "fare": 140.0,
            "vehicleType": "Car",
            "hourOfDay": 10,
            "userRating": 4.0,
            "captainRating": 4.0,
            "horizon": 4
        })).to_request(),
    )
    .await;

    assert_eq!(resp.prob_accept, 0.8);
    assert_eq!(resp.series, vec![0.8, 0.78, 0.76, 0.74]);
}

#[actix_web::test]
async fn empty_body_uses_defaults() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = predict(json!({})).to_request();
    let resp: AcceptResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.series.len(), 6);
    assert_eq!(resp.series[0], resp.prob_accept);
    assert!((resp.prob_accept - 0.84).abs() < 1e-12);
}

#[actix_web::test]
async fn non_positive_horizon_yields_single_point() {
    let app = app!(AcceptServer::from_config(config(None)));

    for horizon in [0, -7] {
        let req = predict(json!({ "horizon": horizon })).to_request();
        let resp: AcceptResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.series, vec![resp.prob_accept]);
    }
}

#[actix_web::test]
async fn response_uses_camel_case_keys() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = predict(json!({ "horizon": 2 })).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert!(body["probAccept"].is_f64());
    assert_eq!(body["series"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn identical_requests_get_identical_answers() {
    let app = app!(AcceptServer::from_config(config(None)));
    let body = json!({ "distanceKm": 8.4, "hourOfDay": 19, "userRating": 3.1 });

    let req = predict(body.clone()).to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    let req = predict(body).to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(first, second);
}

#[actix_web::test]
async fn wrong_field_type_is_unprocessable() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = predict(json!({ "distanceKm": "far" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: ErrorBody = test::read_body_json(resp).await;
    assert!(body.error.contains("invalid type"), "{}", body.error);
}

#[actix_web::test]
async fn long_horizon_is_served_in_full() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = predict(json!({ "horizon": 1_001 })).to_request();
    let resp: AcceptResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.series.len(), 1_001);
    assert!(resp.series.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[actix_web::test]
async fn non_json_body_is_bad_request() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/json"))
        .set_payload("distanceKm=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn only_post_is_routed() {
    let app = app!(AcceptServer::from_config(config(None)));

    let req = test::TestRequest::get().uri("/predict").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::post().uri("/forecast").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn heuristic_model_is_selectable() {
    let server = AcceptServer::from_config(config(Some("heuristic")));
    assert_eq!(server.config().model, ScorerKind::Heuristic);
    let app = app!(server);

    let resp: AcceptResponse = test::call_and_read_body_json(
        &app,
        predict(json!({ "distanceKm": 3.0, "horizon": 2 })).to_request(),
    )
    .await;

    assert_eq!(resp.prob_accept, 0.75);
    assert!((resp.series[1] - 0.73).abs() < 1e-12);
}

#[actix_web::test]
async fn explicit_scorer_can_be_injected() {
    let scorer = Arc::new(PlaceholderScorer);
    let app = app!(AcceptServer::new(config(Some("heuristic")), scorer));

    let req = predict(json!({ "distanceKm": 3.0 })).to_request();
    let resp: AcceptResponse = test::call_and_read_body_json(&app, req).await;

    assert!((resp.prob_accept - 0.84).abs() < 1e-12);
}
