use tracing::warn;

use crate::domain::RawEntry;
use crate::errors::DeskResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed at `url`, in feed order
    fn try_fetch(&self, url: &str) -> DeskResult<Vec<RawEntry>>;
}

/// Fetch a feed, treating an unreachable or malformed feed as having no entries
pub fn fetch_or_empty<S: FeedSource + ?Sized>(source: &S, url: &str) -> Vec<RawEntry> {
    match source.try_fetch(url) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(%url, error = %e, "feed unavailable, skipping");
            Vec::new()
        }
    }
}
