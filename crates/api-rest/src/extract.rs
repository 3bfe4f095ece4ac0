//! Request body decoding.
//!
//! Bodies are read with a hard size limit and decoded as exactly one JSON value. Every decoding
//! failure becomes an [`ApiError::BadRequest`] with a message naming what was wrong, so the
//! client can tell a malformed body apart from a body that decoded but failed validation.
//!
//! A value that fails to decode at the `date` field is reported as a date format error,
//! whatever the underlying serde message was.

use crate::error::ApiError;
use article_core::ArticleError;
use axum::body::Body;
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

const DATE_FIELD: &str = "date";

/// Reads at most `limit` bytes of `body` and decodes them as a single JSON value.
pub async fn read_json<T: DeserializeOwned>(body: Body, limit: usize) -> Result<T, ApiError> {
    let bytes = axum::body::to_bytes(body, limit).await.map_err(|err| {
        let source = err.into_inner();
        if source.downcast_ref::<LengthLimitError>().is_some() {
            ApiError::BadRequest(format!("body must not be larger than {limit} bytes"))
        } else {
            tracing::debug!("failed to read request body: {}", source);
            ApiError::BadRequest("body could not be read".into())
        }
    })?;

    decode_json(&bytes)
}

/// Decodes `bytes` as exactly one JSON value of type `T`.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("body must not be empty".into()));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize::<_, T>(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        describe_decode_error(&path, err.into_inner())
    })?;

    deserializer
        .end()
        .map_err(|_| ApiError::BadRequest("body must only contain a single JSON value".into()))?;

    Ok(value)
}

fn describe_decode_error(path: &str, err: serde_json::Error) -> ApiError {
    let message = match err.classify() {
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {}, column {})",
            err.line(),
            err.column()
        ),
        Category::Io => "body could not be read".to_string(),
        Category::Data => {
            let detail = err.to_string();
            if path == DATE_FIELD {
                ArticleError::InvalidDateFormat.to_string()
            } else if let Some(field) = unknown_field_name(&detail) {
                format!("body contains unknown key \"{field}\"")
            } else if detail.starts_with("invalid type") || detail.starts_with("invalid value") {
                match field_name(path) {
                    Some(field) => {
                        format!("body contains incorrect JSON type for field \"{field}\"")
                    }
                    None => format!(
                        "body contains incorrect JSON type (at line {}, column {})",
                        err.line(),
                        err.column()
                    ),
                }
            } else {
                detail
            }
        }
    };

    ApiError::BadRequest(message)
}

/// Names the top-level field of an error path, so `tags[0]` reports as `tags`.
fn field_name(path: &str) -> Option<&str> {
    let field = path.split(['[', '.']).next()?;
    (!field.is_empty()).then_some(field)
}

/// Extracts `name` from serde's "unknown field `name`, expected ..." message.
fn unknown_field_name(detail: &str) -> Option<&str> {
    let rest = detail.strip_prefix("unknown field `")?;
    rest.split('`').next()
}
