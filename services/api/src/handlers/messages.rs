use crate::error::AppError;
use crate::models::{MessagesQuery, MessagesResponse, parse_numeric, parse_timestamp};
use crate::state::AppState;
use crate::store::MessageFilter;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;
use types::message::{FixMessage, NewFixMessage};

const DEFAULT_LIMIT: usize = 100;

pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessagesQuery>,
) -> Result<Json<MessagesResponse>, AppError> {
    let limit = parse_numeric(params.limit.as_deref(), DEFAULT_LIMIT)?;
    let offset = parse_numeric(params.offset.as_deref(), 0)?;

    let filter = MessageFilter {
        session_id: params.session_id,
        msg_type: params.msg_type,
        start_time: params
            .start_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()?,
        end_time: params.end_time.as_deref().map(parse_timestamp).transpose()?,
    };

    let store = state.store.read().await;
    let (messages, total) = store.query_messages(&filter, limit, offset);

    Ok(Json(MessagesResponse {
        messages,
        total,
        limit,
        offset,
    }))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<FixMessage>, AppError> {
    let store = state.store.read().await;
    match store.message_by_id(&message_id) {
        Some(message) => Ok(Json(message.clone())),
        None => Err(AppError::NotFound("Message not found".to_string())),
    }
}

/// Accepts an arbitrary JSON object; the store assigns id and timestamp.
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<FixMessage>), AppError> {
    let new: NewFixMessage = serde_json::from_value(payload)
        .map_err(|e| anyhow::anyhow!("invalid message payload: {}", e))?;

    let mut store = state.store.write().await;
    let message = store.append_message(new);

    Ok((StatusCode::CREATED, Json(message)))
}
