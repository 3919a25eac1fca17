//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`DeskError`]
//! via `From`, so port boundaries only ever carry this one type.

use std::fmt;

/// Base error for every vaultdesk operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeskError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("backend request failed")]
    Backend(#[from] BackendError),
}

impl DeskError {
    /// Backend path that failed, if this is a backend failure.
    #[must_use]
    pub fn failed_path(&self) -> Option<&str> {
        match self {
            Self::Backend(err) => Some(&err.path),
            Self::Validation(_) => None,
        }
    }
}

/// A domain invariant was violated before anything left the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Language and name are required.")]
    MissingLanguageOrName,

    #[error("item path must not be empty")]
    EmptyPath,

    #[error("task title must not be empty")]
    EmptyTitle,
}

/// A single backend request that did not yield a usable response.
///
/// Transport failures, non-success statuses and malformed bodies all end
/// up here; callers only ever care about *which* path failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request to {path} failed: {kind}")]
pub struct BackendError {
    pub path: String,
    pub kind: FailureKind,
}

impl BackendError {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Why a backend request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, reset, timed out, …
    Transport,
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The body was not the JSON shape we expected.
    Decode,
    /// The HTTP client itself could not be built.
    Client,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("transport error"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Decode => f.write_str("malformed response body"),
            Self::Client => f.write_str("client setup error"),
        }
    }
}
