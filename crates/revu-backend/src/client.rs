//! HTTP access to the review backend.
//!
//! [`ReviewBackend`] is the seam the orchestration layer talks through;
//! [`HttpBackend`] is the real reqwest implementation. Each method performs
//! exactly one attempt: no retries and no cancellation, only the client-level
//! request timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use revu_core::config::RevuConfig;
use revu_core::{Operation, Result, RevuError};

use crate::api::{
    AnswerResponse, CompletionRequest, CompletionResponse, ErrorDetail, FeedbackRequest,
    FeedbackResponse, QueryRequest, RatingsRequest, RatingsResponse, StyleRequest, StyleResponse,
    SummaryRequest, SummaryResponse, TemplateRequest, TemplateResponse, endpoint_path,
};

/// The seven operations the backend exposes, one method each.
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    async fn product_summary(&self, request: SummaryRequest) -> Result<SummaryResponse>;
    async fn component_ratings(&self, request: RatingsRequest) -> Result<RatingsResponse>;
    async fn answer_query(&self, request: QueryRequest) -> Result<AnswerResponse>;
    async fn real_time_feedback(&self, request: FeedbackRequest) -> Result<FeedbackResponse>;
    async fn personalize_review_style(&self, request: StyleRequest) -> Result<StyleResponse>;
    async fn generate_review_template(&self, request: TemplateRequest)
    -> Result<TemplateResponse>;
    async fn text_completion(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// reqwest-backed implementation posting JSON to a fixed base address.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend client with reqwest defaults. Use [`from_config`]
    /// when a request timeout is wanted.
    ///
    /// [`from_config`]: HttpBackend::from_config
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    /// Creates a backend client honoring the configured base URL and timeout.
    pub fn from_config(config: &RevuConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| RevuError::config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: normalize(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<Req, Resp>(&self, operation: Operation, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint_path(operation));
        debug!(%operation, %url, "dispatching request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| RevuError::transport(operation, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(status_error(operation, status, &body_text));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|err| RevuError::decode(operation, err.to_string()))
    }
}

/// Maps a non-2xx response to an error, preferring the server-supplied
/// `detail` message over the raw body when one can be parsed out.
fn status_error(operation: Operation, status: StatusCode, body: &str) -> RevuError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|e| e.detail)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()));
    RevuError::status(operation, status.as_u16(), detail)
}

#[async_trait]
impl ReviewBackend for HttpBackend {
    async fn product_summary(&self, request: SummaryRequest) -> Result<SummaryResponse> {
        self.post(Operation::Summary, &request).await
    }

    async fn component_ratings(&self, request: RatingsRequest) -> Result<RatingsResponse> {
        self.post(Operation::Ratings, &request).await
    }

    async fn answer_query(&self, request: QueryRequest) -> Result<AnswerResponse> {
        self.post(Operation::Query, &request).await
    }

    async fn real_time_feedback(&self, request: FeedbackRequest) -> Result<FeedbackResponse> {
        self.post(Operation::Feedback, &request).await
    }

    async fn personalize_review_style(&self, request: StyleRequest) -> Result<StyleResponse> {
        self.post(Operation::Style, &request).await
    }

    async fn generate_review_template(
        &self,
        request: TemplateRequest,
    ) -> Result<TemplateResponse> {
        self.post(Operation::Template, &request).await
    }

    async fn text_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.post(Operation::Completion, &request).await
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
