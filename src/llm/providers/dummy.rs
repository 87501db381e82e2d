//! Dummy LLM provider — echoes the last user message prefixed with `[echo]`.
//! Used for offline runs and for testing full turns without a real API key.

use crate::llm::ProviderError;
use crate::session::{Message, Role};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, history: &[Message]) -> Result<String, ProviderError> {
        let last_user = history
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(format!("[echo] {last_user}"))
    }
}
