//! Workflow tab selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The three sub-workflows available once a product is loaded.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    /// Follow-up questions about the loaded product.
    #[default]
    Ask,
    /// Drafting a review with feedback and completion.
    Review,
    /// Personalized style suggestions and templates.
    Personalize,
}

/// Tracks which tab is selected. Selection is idempotent and never fails;
/// unknown names are handled at the parsing layer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabController {
    active: ActiveTab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ActiveTab {
        self.active
    }

    pub fn select(&mut self, tab: ActiveTab) {
        self.active = tab;
    }

    /// Return to the default tab.
    pub fn reset(&mut self) {
        self.active = ActiveTab::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_tab_is_ask() {
        let tabs = TabController::new();
        assert_eq!(tabs.active(), ActiveTab::Ask);
    }

    #[test]
    fn test_select_and_reset() {
        let mut tabs = TabController::new();
        tabs.select(ActiveTab::Personalize);
        assert_eq!(tabs.active(), ActiveTab::Personalize);
        tabs.select(ActiveTab::Personalize);
        assert_eq!(tabs.active(), ActiveTab::Personalize);
        tabs.reset();
        assert_eq!(tabs.active(), ActiveTab::Ask);
    }

    #[test]
    fn test_tab_names_round_trip_lowercase() {
        assert_eq!(ActiveTab::Review.to_string(), "review");
        assert_eq!(ActiveTab::from_str("personalize").unwrap(), ActiveTab::Personalize);
        assert!(ActiveTab::from_str("settings").is_err());
    }
}
