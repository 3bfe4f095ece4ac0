//! Error responses.
//!
//! Every failing request is answered with an [`ErrorBody`] envelope. The core crate only returns
//! typed errors; the mapping to status codes lives here.

use api_shared::ErrorBody;
use article_core::ArticleError;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::BTreeMap;

pub const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
pub const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request (bad JSON, bad date format, oversized body).
    #[error("{0}")]
    BadRequest(String),
    /// Well-formed request whose fields break the article rules.
    #[error("failed validation: {0:?}")]
    FailedValidation(BTreeMap<String, String>),
    #[error("the requested resource could not be found")]
    NotFound,
    #[error("the {0} method is not supported for this resource")]
    MethodNotAllowed(Method),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        match err {
            ArticleError::NotFound | ArticleError::NoMatch { .. } => ApiError::NotFound,
            ArticleError::InvalidDateFormat => ApiError::BadRequest(err.to_string()),
            ArticleError::DuplicateKey(_)
            | ArticleError::StorePoisoned
            | ArticleError::InvalidInput(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::FailedValidation(fields) => ErrorBody::fields(fields),
            ApiError::Internal(detail) => {
                tracing::error!("request failed: {}", detail);
                ErrorBody::message(SERVER_ERROR_MESSAGE)
            }
            other => ErrorBody::message(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked.
///
/// The connection is closed so a client does not reuse it after the failure.
pub fn panic_response(detail: &str) -> Response {
    tracing::error!("handler panicked: {}", detail);

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::message(SERVER_ERROR_MESSAGE)),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    response
}
