use crate::date::ArticleDate;

#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid date format")]
    InvalidDateFormat,
    #[error("article with id {0} already exists")]
    DuplicateKey(i64),
    #[error("record not found")]
    NotFound,
    #[error("no articles tagged {tag:?} on {date}")]
    NoMatch { tag: String, date: ArticleDate },
    #[error("article store lock poisoned")]
    StorePoisoned,
}

impl ArticleError {
    /// True for the expected lookup misses (`NotFound`, `NoMatch`).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArticleError::NotFound | ArticleError::NoMatch { .. })
    }
}

pub type ArticleResult<T> = std::result::Result<T, ArticleError>;
