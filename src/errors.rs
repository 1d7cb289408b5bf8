//! Typed error hierarchy for the Yaka client.
//!
//! Two enums cover the two layers:
//! - `ApiError` — transport and server failures from the REST wrappers
//! - `SessionError` — edit-session failures, tagged by which user action
//!   they scope to (load, save, single-item toggle)
//!
//! Best-effort secondary failures (checklist sync during submit, item
//! delete) are a deliberate policy, not an error path: they are logged at
//! warn level and discarded, and never become a `SessionError`.

use thiserror::Error;

/// Errors from the REST service layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// Human-readable detail string from the response body, passed
        /// through to notifications when present.
        detail: Option<String>,
    },
}

impl ApiError {
    /// The server-provided detail string, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) => None,
        }
    }
}

/// Errors from the card edit session. Each variant scopes to one user
/// action; none is fatal to the process.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Initial data fetch failed; the form is not usable.
    #[error("failed to load card data")]
    Load(#[source] ApiError),

    /// Card create/update failed; the form stays open for retry.
    #[error("failed to save card")]
    Save(#[source] ApiError),

    /// A single checklist-item toggle failed; local state is unchanged.
    #[error("failed to update checklist item")]
    ItemToggle(#[source] ApiError),
}

impl SessionError {
    /// Pass through the server's human-readable detail for notifications,
    /// when the underlying failure carried one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Load(e) | Self::Save(e) | Self::ItemToggle(e) => e.detail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_status_carries_detail() {
        let err = ApiError::Status {
            status: 422,
            detail: Some("title must not be empty".to_string()),
        };
        assert_eq!(err.detail(), Some("title must not be empty"));
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn api_error_status_without_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert!(err.detail().is_none());
    }

    #[test]
    fn session_error_passes_server_detail_through() {
        let err = SessionError::Save(ApiError::Status {
            status: 400,
            detail: Some("list does not exist".to_string()),
        });
        assert_eq!(err.server_detail(), Some("list does not exist"));
    }

    #[test]
    fn session_error_variants_are_matchable() {
        let load = SessionError::Load(ApiError::Status { status: 503, detail: None });
        assert!(matches!(load, SessionError::Load(_)));
        let toggle = SessionError::ItemToggle(ApiError::Status { status: 500, detail: None });
        assert!(matches!(toggle, SessionError::ItemToggle(_)));
        assert!(toggle.server_detail().is_none());
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        let api_err = ApiError::Status { status: 404, detail: None };
        assert_std_error(&api_err);
        let session_err = SessionError::Save(api_err);
        assert_std_error(&session_err);
    }
}
