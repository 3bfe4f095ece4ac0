//! # Article Core
//!
//! Core business logic for the article service.
//!
//! This crate contains the in-memory data operations:
//! - Article records and the validation rules they must satisfy
//! - The `YYYY-MM-DD` date codec
//! - A concurrency-safe article store with tag/date queries
//! - Tag summaries built from store queries
//!
//! **No API concerns**: HTTP routing, request decoding and response envelopes belong in
//! `api-rest` or `api-shared`.

pub mod article;
pub mod config;
pub mod date;
pub mod error;
pub mod store;
pub mod summary;
pub mod validator;

pub use article::{validate_article, Article, ArticleInput};
pub use config::{CoreConfig, Environment};
pub use date::ArticleDate;
pub use error::{ArticleError, ArticleResult};
pub use store::ArticleStore;
pub use summary::TagSummary;
pub use validator::Validator;
