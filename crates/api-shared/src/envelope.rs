//! Response envelopes.
//!
//! Failures always use [`ErrorBody`], whose `error` is either one message or a field-to-message
//! map for validation failures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(BTreeMap<String, String>),
}

/// `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail::Message(message.into()),
        }
    }

    pub fn fields(fields: BTreeMap<String, String>) -> Self {
        Self {
            error: ErrorDetail::Fields(fields),
        }
    }
}
