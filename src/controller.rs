//! Conversation controller — drives one turn from raw input to an appended
//! reply.
//!
//! Per-turn flow: trim the input (empty means no turn at all), run the
//! relevance filter against the session's module, then either append the
//! canned refusal or forward the full log to the model and append its
//! answer. A refused question is never appended — the model keeps no memory
//! of out-of-scope attempts.
//!
//! A failed model call aborts the turn: the error propagates to the caller
//! and the already-appended user message stays in the log unanswered. That
//! dangling entry is accepted, not hidden.

use tracing::{debug, info, warn};

use crate::filter;
use crate::llm::{LlmProvider, ProviderError};
use crate::session::{Role, Session};

/// Canned reply for questions outside the selected module.
/// Exact text — tests and the system prompt both reference it verbatim.
pub const REFUSAL: &str = "Sorry, I don't know about this question. \
Please ask something related to the selected module.";

/// Appended to answers under [`MIN_ANSWER_CHARS`] to nudge the user toward
/// a more specific question. A quality heuristic, not a correctness check.
pub const ELABORATION_SUFFIX: &str = "\n\n(Ask a more specific question for deeper explanation.)";

/// Minimum answer length (in characters) before the nudge kicks in.
const MIN_ANSWER_CHARS: usize = 50;

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Empty input — nothing happened, session untouched.
    Noop,
    /// Question failed the relevance filter; refusal appended.
    Refused,
    /// Question reached the model; answer appended.
    Answered,
}

/// The conversation controller. Owns the bound model handle, which is
/// reused across session resets.
pub struct Mentor {
    provider: LlmProvider,
}

impl Mentor {
    pub fn new(provider: LlmProvider) -> Self {
        Self { provider }
    }

    /// Run one turn against `session`.
    ///
    /// The remote call is awaited to completion before the assistant
    /// message is appended — the log never holds a partial answer.
    pub async fn take_turn(
        &self,
        session: &mut Session,
        input: &str,
    ) -> Result<TurnOutcome, ProviderError> {
        if input.trim().is_empty() {
            return Ok(TurnOutcome::Noop);
        }

        let module = session.module();
        if !filter::is_relevant(input, module) {
            info!(module = module.name(), "question out of scope, refusing");
            session.append(Role::Assistant, REFUSAL);
            return Ok(TurnOutcome::Refused);
        }

        session.append(Role::User, input);
        debug!(
            module = module.name(),
            history_len = session.messages().len(),
            "invoking model"
        );

        let raw = match self.provider.complete(session.messages()).await {
            Ok(raw) => raw,
            Err(e) => {
                // User message stays in the log — accepted dangling entry.
                warn!(error = %e, "model invocation failed, turn aborted");
                return Err(e);
            }
        };

        let mut answer = raw.trim().to_string();
        if answer.chars().count() < MIN_ANSWER_CHARS {
            answer.push_str(ELABORATION_SUFFIX);
        }
        session.append(Role::Assistant, answer);
        Ok(TurnOutcome::Answered)
    }
}
