//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Async is delegated to the underlying provider; the `complete` method is
//! `async fn` on the enum so callers need no trait-object machinery.

pub mod providers;

use thiserror::Error;

use crate::session::Message;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    Scripted(providers::scripted::ScriptedProvider),
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
}

impl LlmProvider {
    /// Send the full ordered message log to the provider and return its
    /// text reply. The history always starts with the session's system
    /// message; the provider is one round-trip, no retries.
    pub async fn complete(&self, history: &[Message]) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(history).await,
            LlmProvider::Scripted(p) => p.complete(history).await,
            LlmProvider::OpenAiCompatible(p) => p.complete(history).await,
        }
    }

    /// Whether this backend needs an API key before first use.
    pub fn requires_api_key(name: &str) -> bool {
        matches!(name, "openai" | "openai-compatible")
    }
}
