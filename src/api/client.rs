use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use super::paths;
use super::{
    ApiError, ContactRequest, EventRecord, EventsResponse, MemberRegistration, NewsletterRequest,
    PollVote, RsvpRequest, USER_AGENT,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::BaseUrl(base_url));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn subscribe_newsletter(&self, req: &NewsletterRequest) -> Result<(), ApiError> {
        self.post(paths::NEWSLETTER, req).await
    }

    pub async fn send_contact(&self, req: &ContactRequest) -> Result<(), ApiError> {
        self.post(paths::CONTACT, req).await
    }

    pub async fn rsvp(&self, req: &RsvpRequest) -> Result<(), ApiError> {
        self.post(paths::RSVP, req).await
    }

    pub async fn register_member(&self, req: &MemberRegistration) -> Result<(), ApiError> {
        self.post(paths::MEMBERS, req).await
    }

    pub async fn vote(&self, req: &PollVote) -> Result<(), ApiError> {
        self.post(paths::POLLS, req).await
    }

    pub async fn events(&self) -> Result<Vec<EventRecord>, ApiError> {
        let url = self.url(paths::EVENTS);
        debug!(%url, "GET");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        let listing: EventsResponse = serde_json::from_str(&body)?;
        info!(count = listing.data.len(), "events loaded");
        Ok(listing.data)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");

        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        if status.is_success() {
            info!(path, %status, "submitted");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
