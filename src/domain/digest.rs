use serde::Serialize;

use super::NewsEntry;

/// Ranked output of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Digest {
    /// Top-scored entries, best first
    pub highlights: Vec<NewsEntry>,
    /// Everything else, in the order it was collected
    pub rest: Vec<NewsEntry>,
}

impl Digest {
    /// True when no source produced anything
    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty() && self.rest.is_empty()
    }

    pub fn len(&self) -> usize {
        self.highlights.len() + self.rest.len()
    }
}
