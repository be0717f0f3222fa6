//! Axum route handlers for the prompting API.
//!
//! Every handler holds the session lock for its whole action, so actions on
//! the session never interleave.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::Model;
use crate::prompting::prompts::{PredefinedPrompt, PREDEFINED_PROMPTS};
use crate::prompting::session::{ComparisonOutcome, PredefinedOutput, SessionView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RawPromptRequest {
    pub raw_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct EngineerResponse {
    pub model: Model,
    pub raw_prompt: String,
    pub engineered_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct OutputsResponse {
    pub engineered_prompt: String,
    pub comparison: ComparisonOutcome,
}

#[derive(Debug, Deserialize)]
pub struct RunPredefinedRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectModelRequest {
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub choices: Vec<Model>,
    pub selected: Model,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

/// GET /api/v1/models
pub async fn handle_list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let session = state.session.lock().await;
    Json(ModelsResponse {
        choices: Model::ALL.to_vec(),
        selected: session.model,
    })
}

/// PUT /api/v1/session/model
///
/// The selection applies to every later action in the session.
pub async fn handle_select_model(
    State(state): State<AppState>,
    Json(request): Json<SelectModelRequest>,
) -> Result<Json<ModelsResponse>, AppError> {
    let model = request
        .model
        .parse::<Model>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut session = state.session.lock().await;
    session.model = model;
    Ok(Json(ModelsResponse {
        choices: Model::ALL.to_vec(),
        selected: session.model,
    }))
}

/// GET /api/v1/prompts/predefined
pub async fn handle_list_predefined() -> Json<&'static [PredefinedPrompt]> {
    Json(PREDEFINED_PROMPTS)
}

/// POST /api/v1/prompts/predefined/run
pub async fn handle_run_predefined(
    State(state): State<AppState>,
    Json(request): Json<RunPredefinedRequest>,
) -> Result<Json<PredefinedOutput>, AppError> {
    let mut session = state.session.lock().await;
    let output = state
        .orchestrator
        .run_predefined(&mut session, &request.name)
        .await?;
    Ok(Json(output))
}

/// POST /api/v1/prompts/engineer
pub async fn handle_engineer(
    State(state): State<AppState>,
    Json(request): Json<RawPromptRequest>,
) -> Result<Json<EngineerResponse>, AppError> {
    let mut session = state.session.lock().await;
    let engineered_prompt = state
        .orchestrator
        .generate_engineered_prompt(&mut session, &request.raw_prompt)
        .await?;
    Ok(Json(EngineerResponse {
        model: session.model,
        raw_prompt: request.raw_prompt,
        engineered_prompt,
    }))
}

/// POST /api/v1/compare
///
/// Compares the prompts stored by the last successful `/prompts/engineer` call.
pub async fn handle_compare(
    State(state): State<AppState>,
) -> Result<Json<ComparisonOutcome>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = state.orchestrator.run_comparison(&mut session).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/outputs
///
/// Engineer the prompt, then compare both prompts against the document.
pub async fn handle_generate_outputs(
    State(state): State<AppState>,
    Json(request): Json<RawPromptRequest>,
) -> Result<Json<OutputsResponse>, AppError> {
    let mut session = state.session.lock().await;
    let (engineered_prompt, comparison) = state
        .orchestrator
        .generate_outputs(&mut session, &request.raw_prompt)
        .await?;
    Ok(Json(OutputsResponse {
        engineered_prompt,
        comparison,
    }))
}
