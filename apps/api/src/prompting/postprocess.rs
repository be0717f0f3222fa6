//! Response post-processing: fence stripping for the engineered prompt, and
//! `<output>` payload extraction for the engineered-prompt run.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";
const OUTPUT_OPEN: &str = "<output>";
const OUTPUT_CLOSE: &str = "</output>";

/// Removes a leading and a trailing triple backtick.
///
/// Only the three backtick characters are removed: a language tag after the
/// opening fence (e.g. `json`) stays at the start of the result.
pub fn strip_fences(text: &str) -> &str {
    let text = text.strip_prefix(FENCE).unwrap_or(text);
    text.strip_suffix(FENCE).unwrap_or(text)
}

/// What the engineered-prompt pane displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum EngineeredOutput {
    /// JSON object parsed from the first `<output>` span.
    Structured(Map<String, Value>),
    /// The full completion text, shown as-is.
    Raw(String),
}

impl EngineeredOutput {
    pub fn is_structured(&self) -> bool {
        matches!(self, EngineeredOutput::Structured(_))
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no <output>...</output> span in completion")]
    MissingOutputTag,

    #[error("<output> payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("<output> payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// Text between the first `<output>` and the first `</output>` after it.
/// Later spans are ignored.
pub fn output_span(text: &str) -> Option<&str> {
    let start = text.find(OUTPUT_OPEN)? + OUTPUT_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(OUTPUT_CLOSE)?;
    Some(&rest[..end])
}

/// Drops a leading json fence and everything from the next fence on.
fn unfence_json(span: &str) -> &str {
    match span.strip_prefix(JSON_FENCE) {
        Some(rest) => rest.split(FENCE).next().unwrap_or(rest),
        None => span,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses the JSON object inside the first `<output>` span of `text`.
pub fn parse_output_payload(text: &str) -> Result<Map<String, Value>, ExtractionError> {
    let span = output_span(text).ok_or(ExtractionError::MissingOutputTag)?;
    match serde_json::from_str::<Value>(unfence_json(span))? {
        Value::Object(map) => Ok(map),
        other => Err(ExtractionError::NotAnObject(json_kind(&other))),
    }
}

/// Structured output when the payload parses, otherwise the full `text`.
/// Never fails; parse problems are logged and degrade to raw text.
pub fn extract_structured(text: &str) -> EngineeredOutput {
    match parse_output_payload(text) {
        Ok(map) => EngineeredOutput::Structured(map),
        Err(ExtractionError::MissingOutputTag) => {
            debug!("Completion has no <output> span; showing raw text");
            EngineeredOutput::Raw(text.to_string())
        }
        Err(e) => {
            warn!("Error processing engineered output, showing raw text: {e}");
            EngineeredOutput::Raw(text.to_string())
        }
    }
}
