//! Backend access for Revu.
//!
//! This crate owns everything that crosses the wire: the request/response
//! types for the backend's seven operations, the [`ReviewBackend`] trait the
//! rest of the application programs against, the reqwest implementation, and
//! the [`Dispatcher`] that keeps per-operation loading flags honest.

pub mod api;
pub mod client;
pub mod dispatch;

pub use client::{HttpBackend, ReviewBackend};
pub use dispatch::Dispatcher;
