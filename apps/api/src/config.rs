use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_DOCUMENT_PATH: &str = "./assets/acceptable-policies.pdf";
const DEFAULT_POLICY_URL: &str =
    "https://atp2025.theopeneyes.com/sample/ATP2025-GenAIAcceptableUSPolicySample.pdf";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// PDF loaded once at startup as the shared document context.
    pub document_path: PathBuf,
    /// Public link to the same policy, surfaced by `GET /api/v1/document`.
    pub policy_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            document_path: PathBuf::from(env_or("DOCUMENT_PATH", DEFAULT_DOCUMENT_PATH)),
            policy_url: env_or("POLICY_URL", DEFAULT_POLICY_URL),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config pointing at a local endpoint; never read from the environment.
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: "test-key".to_string(),
            openai_base_url: "http://127.0.0.1:1".to_string(),
            document_path: PathBuf::from("./assets/test-policy.pdf"),
            policy_url: DEFAULT_POLICY_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_reports_missing_key() {
        let err = require_env("PROMPT_LAB_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(err
            .to_string()
            .contains("PROMPT_LAB_SURELY_UNSET_VARIABLE"));
    }

    #[test]
    fn test_env_or_falls_back_to_default() {
        assert_eq!(
            env_or("PROMPT_LAB_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
