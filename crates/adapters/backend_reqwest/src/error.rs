//! reqwest adapter error types.

use vaultdesk_domain::error::{BackendError, DeskError, FailureKind};

/// Errors specific to the reqwest backend adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request never produced a response (refused, reset, timed out).
    #[error("request to {path} failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("malformed response from {path}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl HttpError {
    /// Classify a reqwest failure for `path`.
    pub(crate) fn from_reqwest(path: &str, source: reqwest::Error) -> Self {
        let path = path.to_string();
        if source.is_decode() {
            Self::Decode { path, source }
        } else if let Some(status) = source.status() {
            Self::Status {
                path,
                status: status.as_u16(),
            }
        } else {
            Self::Transport { path, source }
        }
    }

    /// Convert into a [`DeskError::Backend`] naming the failing path.
    pub fn into_domain(self) -> DeskError {
        let (path, kind) = match self {
            Self::Transport { path, .. } => (path, FailureKind::Transport),
            Self::Status { path, status } => (path, FailureKind::Status(status)),
            Self::Decode { path, .. } => (path, FailureKind::Decode),
            Self::Client(_) => (String::new(), FailureKind::Client),
        };
        BackendError::new(path, kind).into()
    }
}

impl From<HttpError> for DeskError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
