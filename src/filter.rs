//! Relevance filter — keyword allow-list gate in front of the model.
//!
//! Matching is deliberately coarse: lowercase the question and look for any
//! module keyword as a contiguous substring. No tokenization, no stemming,
//! no word boundaries — "ml" matches inside "html". That looseness is part
//! of the contract; do not tighten it here.

use crate::registry::Module;

/// Returns `true` iff the question contains at least one of the module's
/// keywords. Empty or whitespace-only input is never relevant.
pub fn is_relevant(question: &str, module: &Module) -> bool {
    let q = question.to_lowercase();
    let q = q.trim();
    if q.is_empty() {
        return false;
    }
    module.keywords().iter().any(|k| q.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn empty_and_whitespace_never_relevant() {
        for m in registry::all_modules() {
            assert!(!is_relevant("", m));
            assert!(!is_relevant("   \t\n  ", m));
        }
    }

    #[test]
    fn every_keyword_matches_in_context() {
        for m in registry::all_modules() {
            for k in m.keywords() {
                let q = format!("please explain {k} to me");
                assert!(is_relevant(&q, m), "'{k}' should match for {}", m.name());
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let sql = registry::find("SQL").unwrap();
        assert!(is_relevant("What does SELECT do?", sql));
        assert!(is_relevant("EXPLAIN A JOIN", sql));
    }

    #[test]
    fn substring_semantics_are_preserved() {
        // "ml" inside "html" counts as a hit — coarse by design.
        let ml = registry::find("Machine Learning (ML)").unwrap();
        assert!(is_relevant("how do I write html", ml));
    }

    #[test]
    fn off_topic_question_rejected() {
        let sql = registry::find("SQL").unwrap();
        assert!(!is_relevant("what is a neural network", sql));
    }
}
