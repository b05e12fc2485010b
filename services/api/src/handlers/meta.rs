use crate::SERVICE_VERSION;
use crate::models::HealthResponse;
use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

/// Root endpoint: service metadata and the endpoint map.
pub async fn index() -> Json<Value> {
    Json(json!({
        "service": "FIX Security Platform API",
        "version": SERVICE_VERSION,
        "status": "running",
        "docs": "See docs/API.md",
        "endpoints": {
            "health": "GET /api/v1/health",
            "messages": "GET /api/v1/messages",
            "message_by_id": "GET /api/v1/messages/{id}",
            "sessions": "GET /api/v1/sessions",
            "alerts": "GET /api/v1/alerts",
            "compliance": "GET /api/v1/compliance",
            "stats": "GET /api/v1/stats",
        }
    }))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: SERVICE_VERSION,
    })
}
