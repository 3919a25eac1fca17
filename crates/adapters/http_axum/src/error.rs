//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use vaultdesk_domain::error::ValidationError;

/// A rejected form submission, answered with `400 Bad Request`.
///
/// Backend failures never end up here: the dashboard service already wrote
/// them to the work log, so handlers redirect back to the page instead.
#[derive(Debug)]
pub struct ActionError(ValidationError);

impl From<ValidationError> for ActionError {
    fn from(err: ValidationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "rejected form submission");
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}
