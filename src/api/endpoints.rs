//! Typed calls for each backend route.

use super::client::ApiClient;
use super::error::ApiError;
use crate::content::{
    ApiInfo, GameScore, NewsArticle, NewsEnvelope, Poll, PollsEnvelope, Quote, SubmitAck, Vote,
    VoteAck, VoteRequest,
};
use crate::forms::VolunteerApplication;

/// Service banner.
pub const ROOT_PATH: &str = "/api/";
/// News feed.
pub const NEWS_PATH: &str = "/api/news";
/// Thought of the day.
pub const QUOTE_PATH: &str = "/api/quotes/today";
/// Open polls.
pub const POLLS_PATH: &str = "/api/polls";
/// Game score submission.
pub const GAME_SCORE_PATH: &str = "/api/games/score";
/// Volunteer application submission.
pub const VOLUNTEER_PATH: &str = "/api/volunteer";

/// What: Path for voting on poll `id`.
///
/// # Errors
/// - `ApiError::InvalidId` when `id` is empty or holds anything but ASCII letters, digits,
///   `-` and `_`, so it can never add segments, a query or a fragment to the path.
pub fn vote_path(id: &str) -> Result<String, ApiError> {
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    Ok(format!("{POLLS_PATH}/{id}/vote"))
}

impl ApiClient {
    /// Fetch the service banner; used as a connectivity check.
    ///
    /// # Errors
    /// - See [`ApiClient::get_json`].
    pub async fn ping(&self) -> Result<ApiInfo, ApiError> {
        self.get_json(ROOT_PATH).await
    }

    /// What: Fetch the news feed.
    ///
    /// Output:
    /// - Articles in the order the backend sent them; an envelope without `news` is empty.
    ///
    /// # Errors
    /// - See [`ApiClient::get_json`].
    pub async fn fetch_news(&self) -> Result<Vec<NewsArticle>, ApiError> {
        let env: NewsEnvelope = self.get_json(NEWS_PATH).await?;
        tracing::info!(count = env.news.len(), "fetched news");
        Ok(env.news)
    }

    /// Fetch today's quote.
    ///
    /// # Errors
    /// - See [`ApiClient::get_json`].
    pub async fn fetch_today_quote(&self) -> Result<Quote, ApiError> {
        self.get_json(QUOTE_PATH).await
    }

    /// Fetch open polls.
    ///
    /// # Errors
    /// - See [`ApiClient::get_json`].
    pub async fn fetch_polls(&self) -> Result<Vec<Poll>, ApiError> {
        let env: PollsEnvelope = self.get_json(POLLS_PATH).await?;
        tracing::info!(count = env.polls.len(), "fetched polls");
        Ok(env.polls)
    }

    /// Cast `vote` on poll `id`.
    ///
    /// # Errors
    /// - See [`vote_path`]; nothing is sent for a malformed id.
    /// - See [`ApiClient::post_json`].
    pub async fn vote_poll(
        &self,
        id: &str,
        vote: Vote,
        idempotency_key: Option<&str>,
    ) -> Result<VoteAck, ApiError> {
        let path = vote_path(id)?;
        self.post_json(&path, &VoteRequest { vote }, idempotency_key)
            .await
    }

    /// Record a finished game.
    ///
    /// # Errors
    /// - See [`ApiClient::post_json`].
    pub async fn submit_game_score(
        &self,
        score: &GameScore,
        idempotency_key: Option<&str>,
    ) -> Result<SubmitAck, ApiError> {
        self.post_json(GAME_SCORE_PATH, score, idempotency_key).await
    }

    /// Submit a validated volunteer application.
    ///
    /// # Errors
    /// - See [`ApiClient::post_json`].
    pub async fn submit_volunteer(
        &self,
        application: &VolunteerApplication,
        idempotency_key: Option<&str>,
    ) -> Result<SubmitAck, ApiError> {
        self.post_json(VOLUNTEER_PATH, application, idempotency_key)
            .await
    }
}
