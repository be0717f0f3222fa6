//! Scripted `CompletionClient` for tests. Routes each call by a substring of the
//! prompt, so concurrently issued calls get deterministic answers.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatMessage, CompletionClient, LlmError, Model, Sampling};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: Model,
    pub prompt: String,
    pub sampling: Sampling,
}

enum Reply {
    Text(String),
    Fail(String),
}

#[derive(Default)]
pub struct ScriptedClient {
    rules: Vec<(String, Reply)>,
    fallback: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `reply` for any prompt containing `needle`.
    pub fn on(mut self, needle: &str, reply: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Text(reply.to_string())));
        self
    }

    /// Fails with a 500 API error for any prompt containing `needle`.
    pub fn fail_on(mut self, needle: &str, message: &str) -> Self {
        self.rules
            .push((needle.to_string(), Reply::Fail(message.to_string())));
        self
    }

    /// Answers `reply` when no rule matches.
    pub fn otherwise(mut self, reply: &str) -> Self {
        self.fallback = Some(reply.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        model: Model,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<String, LlmError> {
        let prompt = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.calls.lock().unwrap().push(RecordedCall {
            model,
            prompt: prompt.clone(),
            sampling,
        });

        let rule = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()));
        match rule {
            Some((_, Reply::Text(text))) => Ok(text.clone()),
            Some((_, Reply::Fail(message))) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => self.fallback.clone().ok_or(LlmError::EmptyContent),
        }
    }
}
