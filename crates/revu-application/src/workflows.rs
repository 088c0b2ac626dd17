//! Per-tab workflow state.
//!
//! Each sub-workflow keeps its own drafts, results and error string; none of
//! them touch the others. All of it is cleared together on session reset.

use revu_backend::api::{StyleRequest, TemplateRequest};

/// State of the follow-up question workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AskState {
    /// Question being composed. Cleared when an answer arrives, kept on
    /// failure so it can be retried.
    pub question: String,
    pub error: Option<String>,
}

/// State of the review drafting workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    pub draft: String,
    pub feedback: Option<String>,
    /// Last completion result. The draft is updated to match when it arrives.
    pub completion: Option<String>,
    pub error: Option<String>,
}

/// How the user wants their reviews to read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePreferences {
    pub writing_style: String,
    pub preferred_length: String,
    pub focus_areas: Vec<String>,
}

impl StylePreferences {
    /// Builds the template request, which carries the preferences flattened
    /// next to the product name.
    pub fn template_request(&self, product_name: impl Into<String>) -> TemplateRequest {
        TemplateRequest {
            product_name: product_name.into(),
            writing_style: self.writing_style.clone(),
            preferred_length: self.preferred_length.clone(),
            focus_areas: self.focus_areas.clone(),
        }
    }
}

impl From<&StylePreferences> for StyleRequest {
    fn from(preferences: &StylePreferences) -> Self {
        Self {
            writing_style: preferences.writing_style.clone(),
            preferred_length: preferences.preferred_length.clone(),
            focus_areas: preferences.focus_areas.clone(),
        }
    }
}

/// State of the personalization workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalizeState {
    pub preferences: StylePreferences,
    pub style_suggestion: Option<String>,
    pub template: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_request_carries_preferences_and_product() {
        let preferences = StylePreferences {
            writing_style: "casual".to_string(),
            preferred_length: "short".to_string(),
            focus_areas: vec!["battery".to_string(), "camera".to_string()],
        };

        let request = preferences.template_request("iPhone 12");
        assert_eq!(request.product_name, "iPhone 12");
        assert_eq!(request.writing_style, "casual");
        assert_eq!(request.focus_areas.len(), 2);
    }

    #[test]
    fn test_style_request_from_preferences() {
        let preferences = StylePreferences {
            writing_style: "formal".to_string(),
            preferred_length: "long".to_string(),
            focus_areas: Vec::new(),
        };

        let request = StyleRequest::from(&preferences);
        assert_eq!(request.writing_style, "formal");
        assert_eq!(request.preferred_length, "long");
        assert!(request.focus_areas.is_empty());
    }
}
