//! In-memory article store.
//!
//! The store owns every article for the lifetime of the process. One instance is constructed at
//! startup and shared by reference (usually an `Arc`); tests build their own.
//!
//! ## Locking
//!
//! The map sits behind a readers-writer lock: lookups and scans share the read lock, inserts take
//! the write lock. Nothing inside a locked region performs I/O or awaits.
//!
//! ## Ownership
//!
//! Callers never see a reference into the map. Inserts store a clone of the caller's article and
//! reads hand back clones, so mutating a returned article cannot affect stored state.

use crate::article::Article;
use crate::date::ArticleDate;
use crate::{ArticleError, ArticleResult};
use std::collections::{BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Concurrency-safe mapping from article id to article.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<HashMap<i64, Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ArticleResult<RwLockReadGuard<'_, HashMap<i64, Article>>> {
        self.articles.read().map_err(|_| {
            tracing::error!("article store lock poisoned (read)");
            ArticleError::StorePoisoned
        })
    }

    fn write(&self) -> ArticleResult<RwLockWriteGuard<'_, HashMap<i64, Article>>> {
        self.articles.write().map_err(|_| {
            tracing::error!("article store lock poisoned (write)");
            ArticleError::StorePoisoned
        })
    }

    /// Stores a copy of `article`.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::DuplicateKey` if an article with the same id already exists; the
    /// stored article is left untouched.
    pub fn insert(&self, article: &Article) -> ArticleResult<()> {
        let mut articles = self.write()?;
        if articles.contains_key(&article.id) {
            tracing::debug!(id = article.id, "rejecting duplicate article id");
            return Err(ArticleError::DuplicateKey(article.id));
        }

        articles.insert(article.id, article.clone());
        tracing::debug!(id = article.id, total = articles.len(), "article stored");
        Ok(())
    }

    /// Returns a copy of the article with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::NotFound` if `id < 1` or no such article exists.
    pub fn get(&self, id: i64) -> ArticleResult<Article> {
        if id < 1 {
            return Err(ArticleError::NotFound);
        }

        self.read()?
            .get(&id)
            .cloned()
            .ok_or(ArticleError::NotFound)
    }

    /// Returns copies of every article dated `date` that carries `tag`.
    ///
    /// This is a linear scan over all stored articles. Tags match exactly and case-sensitively.
    /// The order of the result is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::NoMatch` if nothing matches.
    pub fn articles_by_tag_and_date(
        &self,
        tag: &str,
        date: ArticleDate,
    ) -> ArticleResult<Vec<Article>> {
        let matches: Vec<Article> = self
            .read()?
            .values()
            .filter(|article| article.date == date && article.tags.iter().any(|t| t == tag))
            .cloned()
            .collect();

        tracing::trace!(tag, %date, matches = matches.len(), "tag/date scan");

        if matches.is_empty() {
            return Err(ArticleError::NoMatch {
                tag: tag.to_owned(),
                date,
            });
        }
        Ok(matches)
    }

    /// Returns the distinct tags carried by `articles`, in lexicographic order.
    ///
    /// Every tag is included, so callers summarising a tag query remove the queried tag
    /// themselves.
    pub fn related_tags(articles: &[Article]) -> Vec<String> {
        articles
            .iter()
            .flat_map(|article| article.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> ArticleResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> ArticleResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
