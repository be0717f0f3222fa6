// Prompt engineering & comparison workflow.
// Implements: meta-prompt templating, response post-processing, the comparison
// orchestrator, predefined prompt runs, and the session they all write to.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod orchestrator;
pub mod postprocess;
pub mod prompts;
pub mod session;
pub mod template;
