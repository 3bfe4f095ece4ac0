//! # API Shared
//!
//! Shared definitions for the article service APIs.
//!
//! Contains:
//! - `HealthService` and its response types
//! - The error envelope returned by every failing request
//!
//! Used by `api-rest`; kept free of any HTTP framework.

pub mod envelope;
pub mod health;

pub use envelope::{ErrorBody, ErrorDetail};
pub use health::{HealthRes, HealthService, SystemInfo};
