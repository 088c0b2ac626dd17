//! Top-level session state for the product under inspection.
//!
//! The session is owned exclusively by the orchestration layer and replaced
//! wholesale on a new lookup or reset; sub-workflows only ever see read-only
//! projections of it.

use serde::{Deserialize, Serialize};

/// Coarse view mode, derived from the session contents rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// No summary and no error yet: the client is waiting for a product.
    Input,
    /// A lookup has settled, successfully or not.
    Results,
}

/// The currently inspected product and what the lookup produced for it.
///
/// After a lookup settles, at most one of `summary` and `error` is set;
/// both empty means "awaiting input".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The name or product-page link the user entered.
    pub product_query: String,
    /// Name shown in headings; the backend-supplied display name when
    /// available, otherwise the raw query.
    pub display_name: String,
    pub summary: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub error: Option<String>,
}

impl Session {
    /// An empty session awaiting input.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session populated by a successful lookup.
    pub fn with_results(
        product_query: impl Into<String>,
        display_name: impl Into<String>,
        summary: impl Into<String>,
        price: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            product_query: product_query.into(),
            display_name: display_name.into(),
            summary: Some(summary.into()),
            price,
            image_url,
            error: None,
        }
    }

    /// A session populated by a failed lookup.
    pub fn with_error(product_query: impl Into<String>, message: impl Into<String>) -> Self {
        let product_query = product_query.into();
        Self {
            display_name: product_query.clone(),
            product_query,
            summary: None,
            price: None,
            image_url: None,
            error: Some(message.into()),
        }
    }

    /// The mode this session is in.
    pub fn mode(&self) -> SessionMode {
        if self.summary.is_none() && self.error.is_none() {
            SessionMode::Input
        } else {
            SessionMode::Results
        }
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.mode() == SessionMode::Input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_awaits_input() {
        let session = Session::new();
        assert_eq!(session.mode(), SessionMode::Input);
        assert!(session.is_awaiting_input());
    }

    #[test]
    fn test_successful_lookup_enters_results_without_error() {
        let session = Session::with_results(
            "iPhone 12",
            "Apple iPhone 12",
            "Great battery life",
            Some("$599".to_string()),
            Some("http://x/y.jpg".to_string()),
        );
        assert_eq!(session.mode(), SessionMode::Results);
        assert_eq!(session.summary.as_deref(), Some("Great battery life"));
        assert!(session.error.is_none());
    }

    #[test]
    fn test_failed_lookup_enters_results_with_error_only() {
        let session = Session::with_error("unknown gadget", "No product or review found.");
        assert_eq!(session.mode(), SessionMode::Results);
        assert!(session.summary.is_none());
        assert_eq!(session.error.as_deref(), Some("No product or review found."));
        // The query still identifies the session even when the lookup failed.
        assert_eq!(session.display_name, "unknown gadget");
    }
}
