use crate::validation::{is_empty_payload, validate_payload};
use actix_files::Files;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use serde_json::{Value, json};
use shared::{PredictionTransport, RequestError, TransportResponse, classify};
use uuid::Uuid;

pub fn configure_routes<T>(cfg: &mut web::ServiceConfig, frontend_dir: String)
where
    T: PredictionTransport + 'static,
{
    configure_api::<T>(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api<T>(cfg: &mut web::ServiceConfig)
where
    T: PredictionTransport + 'static,
{
    cfg.service(web::resource("/predict").route(web::post().to(handle_predict::<T>)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}

async fn handle_predict<T>(transport: web::Data<T>, body: web::Bytes) -> HttpResponse
where
    T: PredictionTransport + 'static,
{
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) if !is_empty_payload(&payload) => payload,
        _ => {
            return HttpResponse::BadRequest()
                .content_type("text/plain")
                .body("No data provided");
        }
    };

    let request = match validate_payload(&payload) {
        Ok(request) => request,
        Err(errors) => {
            warn!("Rejected prediction payload: {}", errors.join("; "));
            return HttpResponse::BadRequest().json(json!({ "errors": errors }));
        }
    };

    let request_id = Uuid::new_v4();
    info!("Forwarding prediction {}", request_id);

    let response = match transport.post_prediction(&request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Prediction {} failed upstream: {}", request_id, e);
            return bad_gateway(&e);
        }
    };

    // The model service's own validation errors reach the caller unchanged
    if (400..500).contains(&response.status) {
        warn!("Prediction {} rejected upstream with status {}", request_id, response.status);
        return relay_rejection(response);
    }

    match classify(&response) {
        Ok(result) => {
            info!("Prediction {} -> {:?}", request_id, result);
            HttpResponse::Ok()
                .content_type("text/plain")
                .body(result.as_response_text())
        }
        Err(e) => {
            error!("Prediction {} failed upstream: {}", request_id, e);
            bad_gateway(&e)
        }
    }
}

fn relay_rejection(response: TransportResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_REQUEST);
    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => HttpResponse::build(status).json(body),
        Err(_) => HttpResponse::build(status)
            .content_type("text/plain")
            .body(response.body),
    }
}

fn bad_gateway(error: &RequestError) -> HttpResponse {
    HttpResponse::BadGateway()
        .content_type("text/plain")
        .body(error.to_string())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}
