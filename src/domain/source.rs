use serde::{Deserialize, Serialize};

/// A named syndication feed to pull entries from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Built-in sources, in the order they are processed
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("The Decoder", "https://the-decoder.com/feed/"),
        Source::new("r/LocalLLaMA", "https://www.reddit.com/r/LocalLLaMA/.rss"),
        Source::new("r/OpenAI", "https://www.reddit.com/r/OpenAI/.rss"),
    ]
}
