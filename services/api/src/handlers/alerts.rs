use crate::error::AppError;
use crate::models::{AlertsQuery, AlertsResponse, parse_numeric, parse_timestamp};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};

const DEFAULT_LIMIT: usize = 100;

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertsQuery>,
) -> Result<Json<AlertsResponse>, AppError> {
    let limit = parse_numeric(params.limit.as_deref(), DEFAULT_LIMIT)?;
    let start_time = params
        .start_time
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let store = state.store.read().await;
    let (alerts, total) = store.query_alerts(params.severity.as_deref(), start_time, limit);

    Ok(Json(AlertsResponse { alerts, total }))
}
