//! HTTP error mapping.
//!
//! Every failure is a client error answered with a plain-text message and a
//! trailing newline. No request failure changes store state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body did not decode into the expected JSON shape.
    #[error("{0}")]
    InvalidBody(String),

    /// A `{id}` path segment is not a base-10 user ID.
    #[error("{0}")]
    InvalidId(String),

    /// The store rejected the operation because a user is missing.
    #[error(transparent)]
    Store(#[from] friendgraph_core::Error),
}

impl ApiError {
    /// Status code this error is answered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Store(err) => tracing::debug!(
                status = status.as_u16(),
                user_id = err.user_id(),
                error = %err,
                "Request rejected"
            ),
            _ => tracing::debug!(status = status.as_u16(), error = %self, "Request rejected"),
        }
        (status, format!("{self}\n")).into_response()
    }
}
