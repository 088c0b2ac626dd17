//! Wire types for the review backend.
//!
//! One request/response pair per operation. Response payload fields are all
//! optional at this level; whether a missing field is an error is decided by
//! the caller, since "no summary found" is a domain outcome, not a transport
//! failure.

use revu_core::Operation;
use revu_core::ratings::{ComponentRating, RatingsModel};
use serde::{Deserialize, Serialize};

/// Path for an operation, relative to the backend base URL.
pub fn endpoint_path(operation: Operation) -> &'static str {
    match operation {
        Operation::Summary => "/product_summary",
        Operation::Ratings => "/component_ratings",
        Operation::Query => "/answer_query",
        Operation::Feedback => "/real_time_feedback",
        Operation::Style => "/personalize_review_style",
        Operation::Template => "/generate_review_template",
        Operation::Completion => "/text_completion",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRequest {
    pub product_input: String,
}

impl SummaryRequest {
    pub fn new(product_input: impl Into<String>) -> Self {
        Self {
            product_input: product_input.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingsRequest {
    pub product_input: String,
}

impl RatingsRequest {
    pub fn new(product_input: impl Into<String>) -> Self {
        Self {
            product_input: product_input.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub product_name: String,
    pub query: String,
}

impl QueryRequest {
    pub fn new(product_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            query: query.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub text: String,
}

impl FeedbackRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleRequest {
    pub writing_style: String,
    pub preferred_length: String,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateRequest {
    pub product_name: String,
    pub writing_style: String,
    pub preferred_length: String,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub text: String,
}

impl CompletionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingsResponse {
    pub ratings: Option<RatingsPayload>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingsPayload {
    #[serde(default)]
    pub component_ratings: Vec<WireComponentRating>,
    pub overall_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireComponentRating {
    pub name: String,
    pub rating: f64,
}

impl From<RatingsPayload> for RatingsModel {
    fn from(payload: RatingsPayload) -> Self {
        RatingsModel {
            component_ratings: payload
                .component_ratings
                .into_iter()
                .map(|c| ComponentRating::new(c.name, c.rating))
                .collect(),
            overall_rating: payload.overall_rating,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleResponse {
    pub style_suggestion: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub completion: Option<String>,
}

/// FastAPI-style error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}
