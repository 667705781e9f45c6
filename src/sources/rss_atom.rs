use feed_rs::parser;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::debug;

use crate::domain::RawEntry;
use crate::errors::{DeskError, DeskResult};
use crate::sources::traits::FeedSource;

/// Some hosts (reddit in particular) reject requests without a descriptive agent
const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> DeskResult<feed_rs::model::Feed> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeskError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> DeskResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| DeskError::FeedParse(e.to_string()))
    }

    /// Parse entries from raw feed bytes
    pub fn entries_from_bytes(bytes: &[u8]) -> DeskResult<Vec<RawEntry>> {
        let parsed = Self::parse_bytes(bytes)?;
        Ok(parsed.entries.into_iter().map(Self::to_raw_entry).collect())
    }

    fn to_raw_entry(entry: feed_rs::model::Entry) -> RawEntry {
        let title = entry
            .title
            .map(|t| t.content.trim().to_string())
            .unwrap_or_default();

        let link = entry
            .links
            .into_iter()
            .next()
            .map(|l| l.href)
            .unwrap_or_default();

        // summary -> content body -> title
        let raw_text = entry
            .summary
            .map(|s| html_to_text(&s.content))
            .filter(|s| !s.is_empty())
            .or_else(|| {
                entry
                    .content
                    .and_then(|c| c.body)
                    .map(|body| html_to_text(&body))
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or_else(|| title.clone());

        RawEntry::new(title).with_link(link).with_raw_text(raw_text)
    }
}

impl Default for RssAtomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for RssAtomSource {
    fn try_fetch(&self, url: &str) -> DeskResult<Vec<RawEntry>> {
        let parsed = self.fetch_and_parse(url)?;
        debug!(%url, entries = parsed.entries.len(), "feed parsed");

        Ok(parsed.entries.into_iter().map(Self::to_raw_entry).collect())
    }
}

/// Extract plain text from HTML content, keeping word boundaries between blocks
fn html_to_text(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Some(text_node) = node.value().as_text() {
            text.push_str(text_node);
        }
        if let Some(element) = node.value().as_element() {
            match element.name() {
                "p" | "br" | "div" | "li" | "td" => text.push(' '),
                _ => {}
            }
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
