//! HTTP transport for the directory service.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use roster_core::{Member, MemberDraft, MemberId};

use crate::api::DirectoryApi;
use crate::error::{Error, Result};

/// Error body the service attaches to non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Answer from the service's health probe.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    /// Fixed `"ok"` marker
    pub status: String,
    /// Number of records the directory currently holds
    pub members: usize,
}

/// Directory client that speaks the service's REST surface.
pub struct HttpDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDirectory {
    /// Creates a client for the service at `base_url`, e.g.
    /// `http://127.0.0.1:5000`. Trailing slashes are tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing a caller-supplied `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the service's health probe whether it is up.
    pub async fn health(&self) -> Result<Health> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectory {
    async fn list(&self) -> Result<Vec<Member>> {
        let response = self.http.get(self.url("/team")).send().await?;
        decode(response).await
    }

    async fn create(&self, draft: MemberDraft) -> Result<Member> {
        tracing::debug!(name = %draft.name, "creating member");
        let response = self
            .http
            .post(self.url("/team"))
            .json(&draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, id: MemberId, draft: MemberDraft) -> Result<Member> {
        tracing::debug!(%id, "updating member");
        let response = self
            .http
            .put(self.url(&format!("/team/{id}")))
            .json(&draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn remove(&self, id: MemberId) -> Result<Member> {
        tracing::debug!(%id, "removing member");
        let response = self
            .http
            .delete(self.url(&format!("/team/{id}")))
            .send()
            .await?;
        decode(response).await
    }
}

/// Turns a service response into a value or an [`Error::Api`].
///
/// Non-success answers carry a `{"error": ...}` body; when that body is
/// missing or unreadable the status line's canonical reason stands in.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(Error::api(status.as_u16(), message))
}
