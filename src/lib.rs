//! mentor-bot — a topic-gated mentor chatbot.
//!
//! One learning module is active at a time; a keyword allow-list filters
//! questions before they reach the model, and switching modules starts a
//! fresh conversation. See `registry` for the module table, `controller`
//! for the per-turn flow, and `llm` for the provider backends.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod llm;
pub mod logger;
pub mod registry;
pub mod repl;
pub mod session;
pub mod transcript;
