use crate::error::AppError;
use crate::models::SessionsResponse;
use crate::state::AppState;
use axum::{Json, extract::State};

/// Sessions are derived on the fly by grouping messages; nothing is stored.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<SessionsResponse>, AppError> {
    let store = state.store.read().await;
    let sessions = store.sessions();
    let total = sessions.len();

    Ok(Json(SessionsResponse { sessions, total }))
}
