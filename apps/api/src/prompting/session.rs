//! Session state — everything one interactive session displays, held in one
//! struct and threaded through the orchestrator by `&mut`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::DocumentContext;
use crate::llm_client::{LlmError, Model};
use crate::prompting::postprocess::EngineeredOutput;
use crate::prompting::prompts::ENGINEERED_PROMPT_PLACEHOLDER;

/// Last predefined-prompt run.
#[derive(Debug, Clone, Serialize)]
pub struct PredefinedOutput {
    pub name: String,
    pub model: Model,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

/// Result of one comparison branch. Each branch fails on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchOutcome<T> {
    Ok { output: T },
    Failed { error: String },
}

impl<T> BranchOutcome<T> {
    pub fn from_result(result: Result<T, LlmError>) -> Self {
        match result {
            Ok(output) => BranchOutcome::Ok { output },
            Err(e) => BranchOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    pub fn output(&self) -> Option<&T> {
        match self {
            BranchOutcome::Ok { output } => Some(output),
            BranchOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BranchOutcome::Failed { .. })
    }
}

/// Side-by-side outputs of the raw prompt and the engineered prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutcome {
    pub model: Model,
    /// Completion for the user's prompt, shown verbatim.
    pub raw: BranchOutcome<String>,
    pub engineered: BranchOutcome<EngineeredOutput>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub model: Model,
    /// Loaded once at startup, never mutated.
    pub document: Arc<DocumentContext>,
    pub raw_prompt: Option<String>,
    /// `ENGINEERED_PROMPT_PLACEHOLDER` until the first successful generation.
    pub engineered_prompt: String,
    pub predefined_output: Option<PredefinedOutput>,
    pub comparison: Option<ComparisonOutcome>,
}

impl SessionState {
    pub fn new(document: Arc<DocumentContext>) -> Self {
        Self {
            model: Model::default(),
            document,
            raw_prompt: None,
            engineered_prompt: ENGINEERED_PROMPT_PLACEHOLDER.to_string(),
            predefined_output: None,
            comparison: None,
        }
    }

    pub fn has_engineered_prompt(&self) -> bool {
        is_generated_prompt(&self.engineered_prompt)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            model: self.model,
            raw_prompt: self.raw_prompt.clone(),
            engineered_prompt: self.engineered_prompt.clone(),
            engineered_prompt_ready: self.has_engineered_prompt(),
            predefined_output: self.predefined_output.clone(),
            comparison: self.comparison.clone(),
            document_pages: self.document.page_count(),
        }
    }
}

/// True for a non-blank prompt that is not the placeholder.
pub fn is_generated_prompt(prompt: &str) -> bool {
    !prompt.trim().is_empty() && prompt != ENGINEERED_PROMPT_PLACEHOLDER
}

/// Snapshot of the session returned by `GET /api/v1/session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub model: Model,
    pub raw_prompt: Option<String>,
    pub engineered_prompt: String,
    pub engineered_prompt_ready: bool,
    pub predefined_output: Option<PredefinedOutput>,
    pub comparison: Option<ComparisonOutcome>,
    pub document_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = SessionState::new(Arc::new(DocumentContext::default()));
        assert_eq!(session.model, Model::Gpt4oMini);
        assert_eq!(session.engineered_prompt, ENGINEERED_PROMPT_PLACEHOLDER);
        assert!(!session.has_engineered_prompt());
        assert!(session.raw_prompt.is_none());
        assert!(session.comparison.is_none());
    }

    #[test]
    fn test_is_generated_prompt() {
        assert!(is_generated_prompt("You are a policy analyst."));
        assert!(!is_generated_prompt(ENGINEERED_PROMPT_PLACEHOLDER));
        assert!(!is_generated_prompt("   "));
    }

    #[test]
    fn test_branch_outcome_serialization() {
        let ok: BranchOutcome<String> = BranchOutcome::from_result(Ok("fine".into()));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"status": "ok", "output": "fine"})
        );

        let failed: BranchOutcome<String> = BranchOutcome::from_result(Err(LlmError::Api {
            status: 503,
            message: "overloaded".into(),
        }));
        assert!(failed.is_failed());
        assert!(failed.output().is_none());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({
                "status": "failed",
                "error": "API error (status 503): overloaded"
            })
        );
    }

    #[test]
    fn test_view_reflects_state() {
        let mut session = SessionState::new(Arc::new(DocumentContext::new(vec![
            "a".into(),
            "b".into(),
        ])));
        session.raw_prompt = Some("Summarize".into());
        session.engineered_prompt = "You are an expert.".into();

        let view = session.view();
        assert_eq!(view.document_pages, 2);
        assert!(view.engineered_prompt_ready);
        assert_eq!(view.raw_prompt.as_deref(), Some("Summarize"));
    }
}
