use serde::{Deserialize, Serialize};

/// One item as delivered by a feed source, before summarization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub raw_text: String,
}

impl RawEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: String::new(),
            raw_text: String::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = raw_text.into();
        self
    }

    /// Text to summarize and score; the title stands in when the feed gave no body
    pub fn body(&self) -> &str {
        if self.raw_text.is_empty() {
            &self.title
        } else {
            &self.raw_text
        }
    }
}

/// A summarized and scored news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    pub source: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub score: usize,
}
