use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No store access
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the remote document store
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let store_status = if data.store_probe.check().await {
        "ok"
    } else {
        "unreachable"
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            store: store_status,
        })
    }
}
