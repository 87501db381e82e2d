//! Session state — one conversation bound to one module.
//!
//! A [`Session`] owns the ordered message log. `messages[0]` is always the
//! single system message carrying the active module's instruction prompt;
//! that invariant is re-established on every reset. Switching modules means
//! discarding the log and starting over — history never crosses topics.
//!
//! The model handle is deliberately NOT held here; the controller owns it
//! and reuses it across resets.

use serde::{Deserialize, Serialize};

use crate::registry::Module;

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name, matching the chat-completions convention.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One entry in the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// The mutable state of one ongoing conversation.
#[derive(Debug)]
pub struct Session {
    module: &'static Module,
    messages: Vec<Message>,
}

impl Session {
    /// Fresh session for `module`: log contains only the system message.
    pub fn new(module: &'static Module) -> Self {
        Self {
            module,
            messages: vec![Message::new(Role::System, module.system_prompt())],
        }
    }

    /// Replace the log with a fresh one for `module`.
    pub fn reset(&mut self, module: &'static Module) {
        self.module = module;
        self.messages = vec![Message::new(Role::System, module.system_prompt())];
    }

    /// Create or reset the session in `slot` so it is bound to `module`.
    ///
    /// A module switch implies a fresh conversation — this is where that
    /// rule lives, as a side effect of selection rather than an explicit
    /// user action.
    pub fn ensure_initialized<'a>(
        slot: &'a mut Option<Session>,
        module: &'static Module,
    ) -> &'a mut Session {
        let session = slot.get_or_insert_with(|| Session::new(module));
        if session.module.name() != module.name() {
            session.reset(module);
        }
        session
    }

    /// Append a message to the log. Append-only: prior entries are never
    /// mutated or reordered.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    pub fn module(&self) -> &'static Module {
        self.module
    }

    /// Full ordered log, system message included.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The log as shown to the user — everything after the system message.
    pub fn visible_messages(&self) -> &[Message] {
        &self.messages[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn new_session_holds_exactly_one_system_message() {
        let m = registry::find("Python").unwrap();
        let s = Session::new(m);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, Role::System);
        assert!(s.messages()[0].content.contains("Python"));
        assert!(s.visible_messages().is_empty());
    }

    #[test]
    fn reset_replaces_log_and_rebinds_module() {
        let py = registry::find("Python").unwrap();
        let sql = registry::find("SQL").unwrap();
        let mut s = Session::new(py);
        s.append(Role::User, "what is a list");
        s.append(Role::Assistant, "a sequence");

        s.reset(sql);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.messages()[0].role, Role::System);
        assert!(s.messages()[0].content.contains("SQL"));
        assert_eq!(s.module().name(), "SQL");
    }

    #[test]
    fn ensure_initialized_creates_resets_and_reuses() {
        let py = registry::find("Python").unwrap();
        let sql = registry::find("SQL").unwrap();
        let mut slot: Option<Session> = None;

        Session::ensure_initialized(&mut slot, py).append(Role::User, "hi");
        assert_eq!(slot.as_ref().unwrap().messages().len(), 2);

        // Same module: untouched.
        Session::ensure_initialized(&mut slot, py);
        assert_eq!(slot.as_ref().unwrap().messages().len(), 2);

        // Different module: fresh log of length 1.
        Session::ensure_initialized(&mut slot, sql);
        let s = slot.as_ref().unwrap();
        assert_eq!(s.messages().len(), 1);
        assert!(s.messages()[0].content.contains("SQL"));
    }

    #[test]
    fn append_grows_by_one_and_keeps_order() {
        let m = registry::find("Python").unwrap();
        let mut s = Session::new(m);
        for i in 0..5 {
            let before = s.messages().len();
            s.append(Role::User, format!("q{i}"));
            assert_eq!(s.messages().len(), before + 1);
        }
        let contents: Vec<_> = s.visible_messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["q0", "q1", "q2", "q3", "q4"]);
    }
}
