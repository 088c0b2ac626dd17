//! Loading-flag bookkeeping around backend calls.

use std::sync::Arc;

use revu_core::loading::LoadingTracker;
use revu_core::{Operation, Result};

use crate::api::{
    AnswerResponse, CompletionRequest, CompletionResponse, FeedbackRequest, FeedbackResponse,
    QueryRequest, RatingsRequest, RatingsResponse, StyleRequest, StyleResponse, SummaryRequest,
    SummaryResponse, TemplateRequest, TemplateResponse,
};
use crate::client::ReviewBackend;

/// Wraps a [`ReviewBackend`] so that every dispatch raises its operation's
/// loading flag before the request future is first polled and lowers it when
/// the call settles, on success and failure alike.
///
/// Overlapping dispatches on the same operation are not synchronized; the
/// flag ends up reflecting whichever call settles last.
#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn ReviewBackend>,
    loading: LoadingTracker,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn ReviewBackend>) -> Self {
        Self {
            backend,
            loading: LoadingTracker::new(),
        }
    }

    /// A handle onto the shared flags, for loading indicators.
    pub fn loading(&self) -> LoadingTracker {
        self.loading.clone()
    }

    pub async fn product_summary(&self, request: SummaryRequest) -> Result<SummaryResponse> {
        let _guard = self.loading.begin(Operation::Summary);
        self.backend.product_summary(request).await
    }

    pub async fn component_ratings(&self, request: RatingsRequest) -> Result<RatingsResponse> {
        let _guard = self.loading.begin(Operation::Ratings);
        self.backend.component_ratings(request).await
    }

    pub async fn answer_query(&self, request: QueryRequest) -> Result<AnswerResponse> {
        let _guard = self.loading.begin(Operation::Query);
        self.backend.answer_query(request).await
    }

    pub async fn real_time_feedback(&self, request: FeedbackRequest) -> Result<FeedbackResponse> {
        let _guard = self.loading.begin(Operation::Feedback);
        self.backend.real_time_feedback(request).await
    }

    pub async fn personalize_review_style(&self, request: StyleRequest) -> Result<StyleResponse> {
        let _guard = self.loading.begin(Operation::Style);
        self.backend.personalize_review_style(request).await
    }

    pub async fn generate_review_template(
        &self,
        request: TemplateRequest,
    ) -> Result<TemplateResponse> {
        let _guard = self.loading.begin(Operation::Template);
        self.backend.generate_review_template(request).await
    }

    pub async fn text_completion(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let _guard = self.loading.begin(Operation::Completion);
        self.backend.text_completion(request).await
    }
}
