use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::time::Instant;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub redis: ServiceHealth,
    pub narrative_configured: bool,
    pub version: String,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn handler(state: web::Data<AppState>) -> HttpResponse {
    let start = Instant::now();
    let (redis, healthy) = match state.cache.health_check().await {
        Ok(_) => (
            ServiceHealth {
                status: "connected".to_string(),
                latency_ms: Some(start.elapsed().as_millis() as u64),
                error: None,
            },
            true,
        ),
        Err(e) => (
            ServiceHealth {
                status: "error".to_string(),
                latency_ms: None,
                error: Some(e.to_string()),
            },
            false,
        ),
    };

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        redis,
        narrative_configured: state.narrative.is_some(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if healthy {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
