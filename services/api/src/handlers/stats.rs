use crate::error::AppError;
use crate::models::StatsResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

pub async fn statistics(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let store = state.store.read().await;

    Ok(Json(store.stats()))
}
