pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::document::handlers as document;
use crate::prompting::handlers as prompting;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(prompting::handle_get_session))
        .route("/api/v1/session/model", put(prompting::handle_select_model))
        .route("/api/v1/models", get(prompting::handle_list_models))
        .route("/api/v1/document", get(document::handle_document_info))
        // Predefined prompts
        .route(
            "/api/v1/prompts/predefined",
            get(prompting::handle_list_predefined),
        )
        .route(
            "/api/v1/prompts/predefined/run",
            post(prompting::handle_run_predefined),
        )
        // Meta prompting
        .route("/api/v1/prompts/engineer", post(prompting::handle_engineer))
        .route("/api/v1/compare", post(prompting::handle_compare))
        .route("/api/v1/outputs", post(prompting::handle_generate_outputs))
        .with_state(state)
}
