//! Tag summaries: the bounded view returned for a tag/date query.

use crate::date::ArticleDate;
use crate::store::ArticleStore;
use crate::ArticleResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of article ids listed in a summary.
pub const TAG_SUMMARY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagSummary {
    pub tag: String,
    /// Number of matching articles before the id list is truncated.
    pub count: usize,
    /// Ids of the newest matches, highest id first.
    pub articles: Vec<i64>,
    /// Tags co-occurring with `tag` across every match, sorted, excluding `tag`.
    pub related_tags: Vec<String>,
}

impl TagSummary {
    /// Builds the summary of articles tagged `tag` on `date`.
    ///
    /// Ids are assumed to grow with creation order, so "newest" means highest id.
    ///
    /// # Errors
    ///
    /// Propagates `ArticleError::NoMatch` when nothing matches; an empty summary is never
    /// produced.
    pub fn assemble(store: &ArticleStore, tag: &str, date: ArticleDate) -> ArticleResult<Self> {
        let mut matches = store.articles_by_tag_and_date(tag, date)?;
        matches.sort_unstable_by(|a, b| b.id.cmp(&a.id));

        let articles = matches
            .iter()
            .take(TAG_SUMMARY_LIMIT)
            .map(|article| article.id)
            .collect();

        let related_tags = ArticleStore::related_tags(&matches)
            .into_iter()
            .filter(|t| t != tag)
            .collect();

        Ok(Self {
            tag: tag.to_owned(),
            count: matches.len(),
            articles,
            related_tags,
        })
    }
}
