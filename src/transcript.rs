//! Transcript export — plain-text rendering of the conversation.
//!
//! The system message is an implementation detail and never appears in the
//! export. Rendering is pure and idempotent; call it whenever.

use crate::session::Session;

/// A file-like payload ready for the front-end to save or serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Render the non-system log as `"<ROLE>:\n<content>\n\n"` blocks in order.
/// A log holding only the system message renders as the empty string.
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    for msg in session.visible_messages() {
        out.push_str(&msg.role.as_str().to_uppercase());
        out.push_str(":\n");
        out.push_str(&msg.content);
        out.push_str("\n\n");
    }
    out
}

/// Package the rendered transcript as a downloadable text file named after
/// the active module.
pub fn export(session: &Session) -> ExportPayload {
    ExportPayload {
        file_name: format!("{}_chat.txt", session.module().name()),
        mime_type: "text/plain",
        content: render(session),
    }
}
