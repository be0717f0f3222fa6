use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DocumentInfoResponse {
    pub source_path: String,
    pub policy_url: String,
    pub page_count: usize,
    pub char_count: usize,
}

/// GET /api/v1/document
pub async fn handle_document_info(State(state): State<AppState>) -> Json<DocumentInfoResponse> {
    Json(DocumentInfoResponse {
        source_path: state.config.document_path.display().to_string(),
        policy_url: state.config.policy_url.clone(),
        page_count: state.document.page_count(),
        char_count: state.document.char_count(),
    })
}
