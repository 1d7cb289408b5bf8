//! REST service wrappers for the Yaka backend.
//!
//! `ApiClient` shapes requests and decodes typed responses; it carries no
//! business logic, no retry, and no backoff. A failed call surfaces an
//! [`ApiError`] and leaves the caller's state intact. Non-2xx responses
//! pass the server's human-readable `detail`/`error` string through when
//! the body carries one.

pub mod backend;
pub mod board;
pub mod cards;
pub mod checklist;
pub mod labels;
pub mod lists;
pub mod voice;

pub use backend::CardBackend;
pub use cards::CardPayload;
pub use checklist::ItemPatch;
pub use voice::{VoiceCardSuggestion, VoiceFilterResult, VoiceResponseType, VoiceResult};

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;

use crate::errors::ApiError;

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

/// Error payload shape the backend uses; both keys are seen in the wild.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turn a non-2xx response into an [`ApiError::Status`], extracting
    /// the server's detail string when present.
    pub(crate) async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail.or(body.error));
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", None);
        assert_eq!(client.base_url(), "http://localhost:8000");
        let client = ApiClient::new("http://localhost:8000", None);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_error_body_accepts_either_key() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "no such card"}"#).unwrap();
        assert_eq!(body.detail.or(body.error).as_deref(), Some("no such card"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "bad request"}"#).unwrap();
        assert_eq!(body.detail.or(body.error).as_deref(), Some("bad request"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.or(body.error).is_none());
    }
}
