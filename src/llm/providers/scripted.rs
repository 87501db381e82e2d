//! Scripted LLM provider — pops pre-loaded replies (or failures) in order.
//!
//! Deterministic stand-in for a remote model: tests and demos queue up
//! exactly the responses they need, including transport failures, and each
//! `complete` call consumes the next one. An exhausted script is an error,
//! so an unexpected extra call can't silently succeed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::llm::ProviderError;
use crate::session::Message;

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    // Err holds only the message; ProviderError is rebuilt on pop.
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
}

impl ScriptedProvider {
    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a request failure.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.script.lock().unwrap().push_back(Err(message.into()));
    }

    pub async fn complete(&self, _history: &[Message]) -> Result<String, ProviderError> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(ProviderError::Request(msg)),
            None => Err(ProviderError::Request("script exhausted".into())),
        }
    }
}
