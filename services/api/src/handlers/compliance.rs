use crate::error::AppError;
use crate::models::{ComplianceQuery, ComplianceResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};

pub async fn compliance_status(
    State(state): State<AppState>,
    Query(params): Query<ComplianceQuery>,
) -> Result<Json<ComplianceResponse>, AppError> {
    let store = state.store.read().await;
    let summary = store.compliance_summary(params.session_id.as_deref());

    Ok(Json(summary))
}
