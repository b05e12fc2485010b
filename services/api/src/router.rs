use crate::handlers::{alerts, compliance, messages, meta, sessions, stats};
use crate::state::AppState;
use axum::{
    Router,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(meta::health_check))
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/messages/{id}", get(messages::get_message))
        .route("/sessions", get(sessions::list_sessions))
        .route("/alerts", get(alerts::list_alerts))
        .route("/compliance", get(compliance::compliance_status))
        .route("/stats", get(stats::statistics));

    Router::new()
        .route("/", get(meta::index))
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
