mod config;
mod document;
mod errors;
mod llm_client;
mod prompting;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::{load_document, PdfDocumentProvider};
use crate::llm_client::LlmClient;
use crate::prompting::orchestrator::Orchestrator;
use crate::prompting::session::SessionState;
use crate::prompting::template::PromptTemplate;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prompt Lab API v{}", env!("CARGO_PKG_VERSION"));

    // Extract the policy document once; a bad file aborts startup
    let path = config.document_path.clone();
    let document =
        tokio::task::spawn_blocking(move || load_document(&PdfDocumentProvider, &path)).await??;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )?;
    info!("LLM client initialized (endpoint: {})", config.openai_base_url);

    let orchestrator = Orchestrator::new(Arc::new(llm), PromptTemplate::meta_prompt()?);
    let session = SessionState::new(Arc::new(document));
    info!("Session initialized (model: {})", session.model);

    let state = AppState::new(orchestrator, session, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
