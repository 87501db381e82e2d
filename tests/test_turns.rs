//! End-to-end turn tests through the public API: module selection, gating,
//! answering, module switching, and transcript export together.

use mentor_bot::controller::{ELABORATION_SUFFIX, Mentor, REFUSAL, TurnOutcome};
use mentor_bot::llm::LlmProvider;
use mentor_bot::llm::providers::dummy::DummyProvider;
use mentor_bot::llm::providers::scripted::ScriptedProvider;
use mentor_bot::registry;
use mentor_bot::session::{Role, Session};
use mentor_bot::transcript;

fn dummy_mentor() -> Mentor {
    Mentor::new(LlmProvider::Dummy(DummyProvider))
}

#[tokio::test]
async fn full_conversation_with_gating_and_export() {
    let mentor = dummy_mentor();
    let mut slot: Option<Session> = None;
    let python = registry::find("Python").unwrap();

    let session = Session::ensure_initialized(&mut slot, python);

    // Off-topic first: refusal only, question not retained.
    let outcome = mentor.take_turn(session, "tell me about cooking").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Refused);
    assert_eq!(session.visible_messages().len(), 1);
    assert_eq!(session.visible_messages()[0].content, REFUSAL);

    // On-topic: user + assistant appended, short echo gets the nudge.
    let outcome = mentor.take_turn(session, "what is a python list").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Answered);
    assert_eq!(session.visible_messages().len(), 3);
    assert!(session.visible_messages()[2].content.ends_with(ELABORATION_SUFFIX));

    // Transcript excludes the system prompt and is stable across calls.
    let text = transcript::render(session);
    assert!(text.starts_with("ASSISTANT:\n"));
    assert!(text.contains("USER:\nwhat is a python list\n\n"));
    assert!(!text.contains("expert mentor"));
    assert_eq!(text, transcript::render(session));

    let payload = transcript::export(session);
    assert_eq!(payload.file_name, "Python_chat.txt");
    assert_eq!(payload.mime_type, "text/plain");
}

#[tokio::test]
async fn switching_modules_discards_history() {
    let mentor = dummy_mentor();
    let mut slot: Option<Session> = None;
    let python = registry::find("Python").unwrap();
    let sql = registry::find("SQL").unwrap();

    let session = Session::ensure_initialized(&mut slot, python);
    mentor.take_turn(session, "what is a dict").await.unwrap();
    assert!(session.visible_messages().len() >= 2);

    // Selecting a different module resets to the single system message.
    let session = Session::ensure_initialized(&mut slot, sql);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::System);
    assert!(session.messages()[0].content.contains("SQL"));

    // The fresh session gates by the new module's keywords.
    let outcome = mentor.take_turn(session, "what is a dict").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Refused);
}

#[tokio::test]
async fn failed_turn_leaves_log_usable_for_the_next_one() {
    let script = ScriptedProvider::default();
    script.push_failure("gateway timeout");
    script.push_reply(
        "A SELECT statement reads rows from one or more tables and returns them as a result set.",
    );
    let mentor = Mentor::new(LlmProvider::Scripted(script));

    let sql = registry::find("SQL").unwrap();
    let mut session = Session::new(sql);

    // First attempt fails mid-turn: the user message stands unanswered.
    assert!(mentor.take_turn(&mut session, "what does select do").await.is_err());
    assert_eq!(session.visible_messages().len(), 1);
    assert_eq!(session.visible_messages()[0].role, Role::User);

    // The next turn proceeds normally on top of the dangling entry.
    let outcome = mentor.take_turn(&mut session, "what does select do").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Answered);
    let last = session.visible_messages().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(!last.content.ends_with(ELABORATION_SUFFIX));
}
