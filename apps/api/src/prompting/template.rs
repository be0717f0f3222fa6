//! Prompt Template Engine — a fixed template with a single `{user_task}` slot.

use thiserror::Error;

use crate::prompting::prompts::META_PROMPT_TEMPLATE;

pub const USER_TASK_SLOT: &str = "{user_task}";

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Prompt template has no {{user_task}} slot")]
    MissingSlot,

    #[error("Prompt template has {0} {{user_task}} slots, expected exactly one")]
    MultipleSlots(usize),
}

/// Immutable template, validated once at construction.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        match text.matches(USER_TASK_SLOT).count() {
            0 => Err(TemplateError::MissingSlot),
            1 => Ok(Self { text }),
            n => Err(TemplateError::MultipleSlots(n)),
        }
    }

    /// The built-in meta-prompt.
    pub fn meta_prompt() -> Result<Self, TemplateError> {
        Self::new(META_PROMPT_TEMPLATE)
    }

    /// Substitutes `raw_instruction` verbatim: no escaping, no truncation.
    pub fn render(&self, raw_instruction: &str) -> String {
        self.text.replacen(USER_TASK_SLOT, raw_instruction, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_instruction_and_no_slot() {
        let template = PromptTemplate::meta_prompt().unwrap();
        for instruction in [
            "Summarize the document",
            "List every {obligation} mentioned, with page numbers",
            "  leading and trailing whitespace  ",
            "multi\nline\ninstruction",
        ] {
            let rendered = template.render(instruction);
            assert!(rendered.contains(instruction));
            assert!(!rendered.contains(USER_TASK_SLOT));
        }
    }

    #[test]
    fn test_render_is_pure_substitution() {
        let template = PromptTemplate::new("before {user_task} after").unwrap();
        assert_eq!(template.render("X"), "before X after");
        assert_eq!(template.render(""), "before  after");
    }

    #[test]
    fn test_template_without_slot_is_rejected() {
        assert_eq!(
            PromptTemplate::new("no slot here").unwrap_err(),
            TemplateError::MissingSlot
        );
    }

    #[test]
    fn test_template_with_two_slots_is_rejected() {
        assert_eq!(
            PromptTemplate::new("{user_task} and {user_task}").unwrap_err(),
            TemplateError::MultipleSlots(2)
        );
    }
}
