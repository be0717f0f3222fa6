use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::document::DocumentContext;
use crate::prompting::orchestrator::Orchestrator;
use crate::prompting::session::SessionState;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Orchestrator,
    /// The single interactive session. Held for the whole of each action.
    pub session: Arc<Mutex<SessionState>>,
    /// Same document the session reads; readable without taking the session lock.
    pub document: Arc<DocumentContext>,
    pub config: Config,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator, session: SessionState, config: Config) -> Self {
        Self {
            orchestrator,
            document: session.document.clone(),
            session: Arc::new(Mutex::new(session)),
            config,
        }
    }
}
