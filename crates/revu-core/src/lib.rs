//! Core domain state for the Revu product review assistant client.
//!
//! This crate owns the session model, the keyed loading flags, the
//! append-only question ledger, the ratings model and its chart projection,
//! tab selection, client configuration, and the shared error type. It
//! performs no I/O of its own; talking to the review backend is the job of
//! `revu-backend`, and `revu-application` composes everything into the
//! user-facing session.

pub mod config;
pub mod error;
pub mod ledger;
pub mod loading;
pub mod ratings;
pub mod session;
pub mod tabs;

// Re-export the common error type and the operation keys; nearly every
// downstream module needs both.
pub use error::{Result, RevuError};
pub use loading::Operation;
