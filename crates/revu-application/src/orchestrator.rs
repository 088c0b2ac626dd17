//! Session orchestration.
//!
//! `SessionOrchestrator` is the single writer over all client-side state:
//! the product session, the ratings model, the question ledger, the active
//! tab and the per-workflow drafts. Frontends trigger its methods and then
//! re-render from [`SessionSnapshot`]; they never mutate state themselves.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use revu_backend::Dispatcher;
use revu_backend::api::{
    CompletionRequest, FeedbackRequest, QueryRequest, RatingsRequest, StyleRequest, SummaryRequest,
};
use revu_core::config::RevuConfig;
use revu_core::ledger::{QueryLedger, QueryRecord};
use revu_core::loading::LoadingTracker;
use revu_core::ratings::RatingsModel;
use revu_core::session::{Session, SessionMode};
use revu_core::tabs::{ActiveTab, TabController};

use crate::workflows::{AskState, PersonalizeState, ReviewState, StylePreferences};

/// Shown when a lookup succeeds at the transport level but carries no summary.
pub const NO_PRODUCT_FOUND: &str = "No product or review found.";
/// Shown when the lookup dispatch itself fails and the server sent no detail.
pub const LOOKUP_FAILED: &str = "An error occurred while fetching data.";
/// Shown when a question is submitted empty; no dispatch is made.
pub const EMPTY_QUESTION: &str = "Please enter a question.";
/// Shown when the question dispatch fails.
pub const QUESTION_FAILED: &str = "Could not get an answer. Please try again later.";
/// Shown when the answer payload is missing from a well-formed response.
pub const NO_ANSWER_FOUND: &str = "No answer found for this question.";
/// Recorded as a notice when ratings fail and surfacing is enabled.
pub const RATINGS_UNAVAILABLE: &str = "Component ratings are unavailable for this product.";

/// Read-only copy of everything a frontend renders from.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub session: Session,
    pub ratings: RatingsModel,
    pub ledger: QueryLedger,
    pub active_tab: ActiveTab,
    pub ask: AskState,
    pub review: ReviewState,
    pub personalize: PersonalizeState,
}

impl SessionSnapshot {
    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }
}

/// Owns and mutates all session state on behalf of the frontend.
///
/// Methods take `&self`; interior mutability keeps overlapping workflow
/// invocations expressible without any parallel mutation. No lock is ever
/// held across a dispatch await, so reads stay responsive while a request
/// is in flight.
pub struct SessionOrchestrator {
    dispatcher: Dispatcher,
    /// Whether a failed ratings fetch records a user-visible notice.
    surface_ratings_errors: bool,
    session: Arc<RwLock<Session>>,
    ratings: Arc<RwLock<RatingsModel>>,
    ledger: Arc<RwLock<QueryLedger>>,
    tabs: Arc<RwLock<TabController>>,
    ask: Arc<RwLock<AskState>>,
    review: Arc<RwLock<ReviewState>>,
    personalize: Arc<RwLock<PersonalizeState>>,
    /// Pending non-blocking notice, consumed by [`take_notice`].
    ///
    /// [`take_notice`]: SessionOrchestrator::take_notice
    notice: Arc<RwLock<Option<String>>>,
}

impl SessionOrchestrator {
    pub fn new(dispatcher: Dispatcher, config: &RevuConfig) -> Self {
        Self {
            dispatcher,
            surface_ratings_errors: config.surface_ratings_errors,
            session: Arc::new(RwLock::new(Session::new())),
            ratings: Arc::new(RwLock::new(RatingsModel::default())),
            ledger: Arc::new(RwLock::new(QueryLedger::new())),
            tabs: Arc::new(RwLock::new(TabController::new())),
            ask: Arc::new(RwLock::new(AskState::default())),
            review: Arc::new(RwLock::new(ReviewState::default())),
            personalize: Arc::new(RwLock::new(PersonalizeState::default())),
            notice: Arc::new(RwLock::new(None)),
        }
    }

    /// The shared loading flags, for frontend indicators.
    pub fn loading(&self) -> LoadingTracker {
        self.dispatcher.loading()
    }

    /// Clones the current state for rendering.
    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.session.read().await.clone(),
            ratings: self.ratings.read().await.clone(),
            ledger: self.ledger.read().await.clone(),
            active_tab: self.tabs.read().await.active(),
            ask: self.ask.read().await.clone(),
            review: self.review.read().await.clone(),
            personalize: self.personalize.read().await.clone(),
        }
    }

    pub async fn mode(&self) -> SessionMode {
        self.session.read().await.mode()
    }

    /// Looks up a product and, if a summary comes back, fetches its
    /// component ratings with the same input, strictly in that order.
    ///
    /// The session is replaced wholesale: on success with summary, price,
    /// image and display name; on a summary-less response or a dispatch
    /// failure, with a visible error. A ratings failure never touches the
    /// session (see [`fetch_ratings`]).
    ///
    /// [`fetch_ratings`]: SessionOrchestrator::fetch_ratings
    pub async fn lookup_product(&self, product_query: &str) {
        debug!("[SessionOrchestrator] looking up product: {product_query}");

        // The previous product's ratings and notices must not outlive it.
        *self.ratings.write().await = RatingsModel::default();
        *self.notice.write().await = None;

        let result = self
            .dispatcher
            .product_summary(SummaryRequest::new(product_query))
            .await;

        match result {
            Ok(body) => match body.summary.filter(|s| !s.is_empty()) {
                Some(summary) => {
                    let display_name = body
                        .display_name
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| product_query.to_string());
                    *self.session.write().await = Session::with_results(
                        product_query,
                        display_name,
                        summary,
                        body.price,
                        body.image_url,
                    );
                    self.fetch_ratings(product_query).await;
                }
                None => {
                    debug!("[SessionOrchestrator] lookup returned no summary");
                    *self.session.write().await =
                        Session::with_error(product_query, NO_PRODUCT_FOUND);
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] lookup failed: {err}");
                let message = err
                    .server_detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| LOOKUP_FAILED.to_string());
                *self.session.write().await = Session::with_error(product_query, message);
            }
        }
    }

    /// Fetches component ratings for the product just looked up.
    ///
    /// Failure leaves the model at its empty default and never disturbs the
    /// session; when `surface_ratings_errors` is on, a one-shot notice is
    /// recorded instead.
    async fn fetch_ratings(&self, product_query: &str) {
        let result = self
            .dispatcher
            .component_ratings(RatingsRequest::new(product_query))
            .await;

        match result {
            Ok(body) => {
                *self.ratings.write().await =
                    body.ratings.map(RatingsModel::from).unwrap_or_default();
            }
            Err(err) => {
                warn!("[SessionOrchestrator] ratings fetch failed: {err}");
                *self.ratings.write().await = RatingsModel::default();
                if self.surface_ratings_errors {
                    *self.notice.write().await = Some(RATINGS_UNAVAILABLE.to_string());
                }
            }
        }
    }

    /// Asks a follow-up question about the current product.
    ///
    /// An empty or whitespace-only question is rejected locally without a
    /// dispatch. On success with an answer, the exchange is appended to the
    /// ledger and the draft cleared; otherwise the draft is kept so the user
    /// can retry.
    pub async fn ask_question(&self, question: &str) {
        if question.trim().is_empty() {
            self.ask.write().await.error = Some(EMPTY_QUESTION.to_string());
            return;
        }

        {
            let mut ask = self.ask.write().await;
            ask.question = question.to_string();
            ask.error = None;
        }

        let product_name = self.session.read().await.product_query.clone();
        let result = self
            .dispatcher
            .answer_query(QueryRequest::new(product_name, question))
            .await;

        match result {
            Ok(body) => match body.answer.filter(|a| !a.is_empty()) {
                Some(answer) => {
                    self.ledger
                        .write()
                        .await
                        .append(QueryRecord::new(question, answer));
                    let mut ask = self.ask.write().await;
                    ask.question.clear();
                    ask.error = None;
                }
                None => {
                    self.ask.write().await.error = Some(NO_ANSWER_FOUND.to_string());
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] question failed: {err}");
                self.ask.write().await.error = Some(QUESTION_FAILED.to_string());
            }
        }
    }

    /// Replaces the review draft.
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.review.write().await.draft = text.into();
    }

    /// Requests feedback on the current review draft.
    pub async fn request_feedback(&self) {
        let text = self.review.read().await.draft.clone();
        let result = self
            .dispatcher
            .real_time_feedback(FeedbackRequest::new(text))
            .await;

        let mut review = self.review.write().await;
        match result {
            Ok(body) => match body.feedback.filter(|f| !f.is_empty()) {
                Some(feedback) => {
                    review.feedback = Some(feedback);
                    review.error = None;
                }
                None => {
                    review.error = Some("No feedback was returned for this draft.".to_string());
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] feedback failed: {err}");
                review.error = Some(dispatch_error_message(
                    &err,
                    "Could not get feedback. Please try again later.",
                ));
            }
        }
    }

    /// Completes the current review draft. A successful completion is stored
    /// and also replaces the draft, so further edits continue from it.
    pub async fn complete_draft(&self) {
        let text = self.review.read().await.draft.clone();
        let result = self
            .dispatcher
            .text_completion(CompletionRequest::new(text))
            .await;

        let mut review = self.review.write().await;
        match result {
            Ok(body) => match body.completion.filter(|c| !c.is_empty()) {
                Some(completion) => {
                    review.draft = completion.clone();
                    review.completion = Some(completion);
                    review.error = None;
                }
                None => {
                    review.error = Some("No completion was returned for this draft.".to_string());
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] completion failed: {err}");
                review.error = Some(dispatch_error_message(
                    &err,
                    "Could not complete the text. Please try again later.",
                ));
            }
        }
    }

    /// Replaces the style preferences used by the personalization workflow.
    pub async fn set_preferences(&self, preferences: StylePreferences) {
        self.personalize.write().await.preferences = preferences;
    }

    /// Requests a style suggestion for the stored preferences.
    pub async fn suggest_style(&self) {
        let preferences = self.personalize.read().await.preferences.clone();
        let result = self
            .dispatcher
            .personalize_review_style(StyleRequest::from(&preferences))
            .await;

        let mut personalize = self.personalize.write().await;
        match result {
            Ok(body) => match body.style_suggestion.filter(|s| !s.is_empty()) {
                Some(suggestion) => {
                    personalize.style_suggestion = Some(suggestion);
                    personalize.error = None;
                }
                None => {
                    personalize.error = Some("No style suggestion was returned.".to_string());
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] style suggestion failed: {err}");
                personalize.error = Some(dispatch_error_message(
                    &err,
                    "Could not personalize the style. Please try again later.",
                ));
            }
        }
    }

    /// Generates a review template for the current product and the stored
    /// preferences.
    pub async fn generate_template(&self) {
        let preferences = self.personalize.read().await.preferences.clone();
        let product_name = self.session.read().await.product_query.clone();
        let result = self
            .dispatcher
            .generate_review_template(preferences.template_request(product_name))
            .await;

        let mut personalize = self.personalize.write().await;
        match result {
            Ok(body) => match body.template.filter(|t| !t.is_empty()) {
                Some(template) => {
                    personalize.template = Some(template);
                    personalize.error = None;
                }
                None => {
                    personalize.error = Some("No template was returned.".to_string());
                }
            },
            Err(err) => {
                warn!("[SessionOrchestrator] template failed: {err}");
                personalize.error = Some(dispatch_error_message(
                    &err,
                    "Could not generate a template. Please try again later.",
                ));
            }
        }
    }

    pub async fn select_tab(&self, tab: ActiveTab) {
        self.tabs.write().await.select(tab);
    }

    pub async fn active_tab(&self) -> ActiveTab {
        self.tabs.read().await.active()
    }

    /// Takes the pending notice, if any. A notice is shown at most once.
    pub async fn take_notice(&self) -> Option<String> {
        self.notice.write().await.take()
    }

    /// Returns to the awaiting-input state: clears the session, the ratings,
    /// the ledger, every workflow state and the notice, and selects the
    /// default tab. In-flight loading flags are left to their own settlement.
    pub async fn reset(&self) {
        debug!("[SessionOrchestrator] resetting session");
        *self.session.write().await = Session::new();
        *self.ratings.write().await = RatingsModel::default();
        self.ledger.write().await.clear();
        self.tabs.write().await.reset();
        *self.ask.write().await = AskState::default();
        *self.review.write().await = ReviewState::default();
        *self.personalize.write().await = PersonalizeState::default();
        *self.notice.write().await = None;
    }
}

/// Prefers the server-supplied detail over the workflow's generic message.
fn dispatch_error_message(err: &revu_core::RevuError, fallback: &str) -> String {
    err.server_detail()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
