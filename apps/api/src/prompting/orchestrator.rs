//! Comparison Orchestrator — sequences the completion calls of the prompt
//! engineering workflow and records their results in the session.
//!
//! Flow: raw instruction → meta-prompt → engineered prompt (fence-stripped) →
//!       { raw prompt + document, engineered prompt + document } → side-by-side outputs.
//!
//! No call is ever retried. The user re-triggers an action to try again.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::document::DocumentContext;
use crate::errors::AppError;
use crate::llm_client::prompts::{with_document, PDF_CONTENT_HEADER, TEXT_CONTENT_HEADER};
use crate::llm_client::{CompletionClient, Model, Sampling};
use crate::prompting::postprocess::{extract_structured, strip_fences, EngineeredOutput};
use crate::prompting::prompts::find_predefined;
use crate::prompting::session::{
    is_generated_prompt, BranchOutcome, ComparisonOutcome, PredefinedOutput, SessionState,
};
use crate::prompting::template::PromptTemplate;

#[derive(Clone)]
pub struct Orchestrator {
    llm: Arc<dyn CompletionClient>,
    template: PromptTemplate,
}

impl Orchestrator {
    pub fn new(llm: Arc<dyn CompletionClient>, template: PromptTemplate) -> Self {
        Self { llm, template }
    }

    /// Turns `raw_instruction` into an engineered prompt with one completion call.
    ///
    /// On failure the session is left untouched.
    pub async fn generate_engineered_prompt(
        &self,
        session: &mut SessionState,
        raw_instruction: &str,
    ) -> Result<String, AppError> {
        if raw_instruction.trim().is_empty() {
            return Err(AppError::Validation("raw_prompt cannot be empty".to_string()));
        }

        let meta_prompt = self.template.render(raw_instruction);
        info!("Generating engineered prompt with {}", session.model);

        let completion = self
            .llm
            .complete_prompt(session.model, &meta_prompt, Sampling::default())
            .await
            .map_err(|e| AppError::Llm(format!("Engineered prompt generation failed: {e}")))?;

        let engineered = strip_fences(&completion).to_string();
        session.raw_prompt = Some(raw_instruction.to_string());
        session.engineered_prompt = engineered.clone();
        Ok(engineered)
    }

    /// Runs the session's raw and engineered prompts against its document.
    pub async fn run_comparison(
        &self,
        session: &mut SessionState,
    ) -> Result<ComparisonOutcome, AppError> {
        let raw_prompt = session.raw_prompt.clone().unwrap_or_default();
        let outcome = self
            .compare(
                &raw_prompt,
                &session.engineered_prompt,
                &session.document,
                session.model,
            )
            .await?;
        session.comparison = Some(outcome.clone());
        Ok(outcome)
    }

    /// Issues exactly two completion calls, concurrently. A failure in one
    /// branch is reported in that branch only.
    pub async fn compare(
        &self,
        raw_prompt: &str,
        engineered_prompt: &str,
        document: &DocumentContext,
        model: Model,
    ) -> Result<ComparisonOutcome, AppError> {
        if raw_prompt.trim().is_empty() {
            return Err(AppError::Validation(
                "No user prompt provided. Generate an engineered prompt first.".to_string(),
            ));
        }
        if !is_generated_prompt(engineered_prompt) {
            return Err(AppError::Validation(
                "Engineered prompt has not been generated yet".to_string(),
            ));
        }

        let document_text = document.joined();
        let raw_request = with_document(raw_prompt, TEXT_CONTENT_HEADER, &document_text);
        let engineered_request =
            with_document(engineered_prompt, PDF_CONTENT_HEADER, &document_text);
        let sampling = Sampling::low_temperature();

        info!(
            "Running comparison with {} over {} document pages",
            model,
            document.page_count()
        );
        let (raw, engineered) = tokio::join!(
            self.llm.complete_prompt(model, &raw_request, sampling),
            self.llm.complete_prompt(model, &engineered_request, sampling),
        );

        if let Err(e) = &raw {
            error!("User prompt branch failed: {e}");
        }
        if let Err(e) = &engineered {
            error!("Engineered prompt branch failed: {e}");
        }

        let outcome = ComparisonOutcome {
            model,
            raw: BranchOutcome::from_result(raw),
            engineered: BranchOutcome::from_result(
                engineered.map(|text| extract_structured(&text)),
            ),
            generated_at: Utc::now(),
        };
        info!(
            "Comparison finished: raw_ok={}, engineered_ok={}, engineered_structured={}",
            !outcome.raw.is_failed(),
            !outcome.engineered.is_failed(),
            outcome
                .engineered
                .output()
                .is_some_and(EngineeredOutput::is_structured)
        );
        Ok(outcome)
    }

    /// Runs one catalog prompt against the document with default sampling.
    pub async fn run_predefined(
        &self,
        session: &mut SessionState,
        name: &str,
    ) -> Result<PredefinedOutput, AppError> {
        let predefined = find_predefined(name)
            .ok_or_else(|| AppError::NotFound(format!("Predefined prompt '{name}' not found")))?;

        let request = with_document(
            predefined.prompt,
            TEXT_CONTENT_HEADER,
            &session.document.joined(),
        );
        info!("Running predefined prompt '{}' with {}", name, session.model);

        let text = self
            .llm
            .complete_prompt(session.model, &request, Sampling::default())
            .await
            .map_err(|e| AppError::Llm(format!("Predefined prompt failed: {e}")))?;

        let output = PredefinedOutput {
            name: predefined.name.to_string(),
            model: session.model,
            text,
            generated_at: Utc::now(),
        };
        session.predefined_output = Some(output.clone());
        Ok(output)
    }

    /// Generate-then-compare in one action. Stops if generation fails.
    pub async fn generate_outputs(
        &self,
        session: &mut SessionState,
        raw_instruction: &str,
    ) -> Result<(String, ComparisonOutcome), AppError> {
        let engineered = self
            .generate_engineered_prompt(session, raw_instruction)
            .await?;
        let comparison = self.run_comparison(session).await?;
        Ok((engineered, comparison))
    }
}
