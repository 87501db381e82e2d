//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies the `MENTOR_LOG_LEVEL` env override. The API key comes from
//! the `LLM_API_KEY` env var only — never TOML — and a remote provider
//! without one is a fatal startup error: the process must not start
//! accepting questions it cannot answer.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::llm::LlmProvider;

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (e.g. `"dummy"`, `"openai"`).
    pub provider: String,
    /// Config for the OpenAI / OpenAI-compatible provider (`[llm.openai]`).
    pub openai: OpenAiConfig,
}

/// Fully-resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub llm: LlmConfig,
    /// API key from `LLM_API_KEY` env var — `None` only for keyless providers.
    pub llm_api_key: Option<String>,
}

// ── Raw TOML shape ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    mentor: RawMentor,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Debug, Deserialize)]
struct RawMentor {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawMentor {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

#[derive(Debug, Deserialize)]
struct RawLlm {
    #[serde(default = "default_provider")]
    provider: String,
    #[serde(default)]
    openai: RawOpenAi,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_provider(), openai: RawOpenAi::default() }
    }
}

#[derive(Debug, Deserialize)]
struct RawOpenAi {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_temperature")]
    temperature: f32,
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOpenAi {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "dummy".to_string()
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_seconds() -> u64 {
    60
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load config from the given path, or `config/default.toml`, then apply
/// env-var overrides. A missing default file falls back to built-in values
/// (dummy provider, info logging).
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let log_level_override = env::var("MENTOR_LOG_LEVEL").ok();
    let api_key = env::var("LLM_API_KEY").ok();

    let raw = match config_path {
        Some(path) => read_raw(Path::new(path))?,
        None => {
            let default_path = Path::new("config/default.toml");
            if default_path.exists() {
                read_raw(default_path)?
            } else {
                RawConfig::default()
            }
        }
    };

    resolve(raw, log_level_override.as_deref(), api_key)
}

fn read_raw(path: &Path) -> Result<RawConfig, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&text)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))
}

/// Internal resolver — tests pass overrides directly instead of mutating
/// env vars.
fn resolve(
    raw: RawConfig,
    log_level_override: Option<&str>,
    api_key: Option<String>,
) -> Result<Config, AppError> {
    let provider = raw.llm.provider;

    if LlmProvider::requires_api_key(&provider) && api_key.is_none() {
        return Err(AppError::Config(format!(
            "provider '{provider}' requires an API key; set the LLM_API_KEY env var"
        )));
    }

    Ok(Config {
        log_level: log_level_override.unwrap_or(&raw.mentor.log_level).to_string(),
        llm: LlmConfig {
            provider,
            openai: OpenAiConfig {
                api_base_url: raw.llm.openai.api_base_url,
                model: raw.llm.openai.model,
                temperature: raw.llm.openai.temperature,
                timeout_seconds: raw.llm.openai.timeout_seconds,
            },
        },
        llm_api_key: api_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_from(text: &str) -> RawConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn empty_toml_resolves_to_defaults() {
        let config = resolve(raw_from(""), None, None).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.llm.provider, "dummy");
        assert_eq!(config.llm.openai.timeout_seconds, 60);
    }

    #[test]
    fn log_level_override_wins() {
        let raw = raw_from("[mentor]\nlog_level = \"warn\"\n");
        let config = resolve(raw, Some("debug"), None).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn openai_provider_without_key_is_fatal() {
        let raw = raw_from("[llm]\nprovider = \"openai\"\n");
        let err = resolve(raw, None, None).unwrap_err();
        assert!(err.to_string().contains("LLM_API_KEY"));
    }

    #[test]
    fn openai_provider_with_key_resolves() {
        let raw = raw_from(
            "[llm]\nprovider = \"openai\"\n[llm.openai]\nmodel = \"gpt-4o\"\n",
        );
        let config = resolve(raw, None, Some("sk-test".into())).unwrap();
        assert_eq!(config.llm.openai.model, "gpt-4o");
        assert_eq!(config.llm_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn dummy_provider_needs_no_key() {
        let raw = raw_from("[llm]\nprovider = \"dummy\"\n");
        assert!(resolve(raw, None, None).is_ok());
    }

    #[test]
    fn unreadable_path_is_a_config_error() {
        let err = read_raw(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
