//! Server errors and their HTTP mapping.

use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use barcode_core::PipelineError;
use thiserror::Error;
use tokio::task::JoinError;

/// Body returned for unknown routes and unsupported symbologies.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Failures while starting or running the listener.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Failures of a single `/generate` request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The blocking task panicked or was cancelled
    #[error("internal error")]
    Task(#[from] JoinError),
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Pipeline(PipelineError::UnsupportedSymbology(_)) => StatusCode::NOT_FOUND,
            ApiError::Pipeline(PipelineError::InvalidSizeFormat)
            | ApiError::Pipeline(PipelineError::InvalidSizeValue) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::Encoding(_))
            | ApiError::Pipeline(PipelineError::Scaling(_))
            | ApiError::Pipeline(PipelineError::Serialization(_))
            | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text response body.
    pub fn body(&self) -> String {
        match self {
            ApiError::Pipeline(PipelineError::UnsupportedSymbology(_)) => NOT_FOUND_BODY.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::warn!("request failed with {status}: {self}");
        (status, self.body()).into_response()
    }
}
