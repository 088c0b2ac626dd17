//! Use-case layer for Revu.
//!
//! Composes the backend dispatcher with the domain state into the
//! workflows a frontend drives: product lookup with the dependent ratings
//! fetch, follow-up questions, review drafting and personalization.

pub mod orchestrator;
pub mod workflows;

pub use orchestrator::{SessionOrchestrator, SessionSnapshot};
pub use workflows::{AskState, PersonalizeState, ReviewState, StylePreferences};
