use serde::Serialize;

use crate::domain::{Digest, NewsEntry};
use crate::errors::DeskResult;

pub const NO_NEWS_MESSAGE: &str = "No news found. Check the sources or your connection.";

/// Timestamp shown in the header, local time
pub fn now_string() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render a digest as plain text for the terminal
pub fn render_text(digest: &Digest, now: &str) -> String {
    let mut out = format!("AI News Digest\nLast updated: {}\n\n", now);

    if digest.is_empty() {
        out.push_str(NO_NEWS_MESSAGE);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("== Top {} highlights ==\n\n", digest.highlights.len()));
    for (n, entry) in digest.highlights.iter().enumerate() {
        out.push_str(&format_entry(&format!("{}. {}", n + 1, entry.title), entry));
    }

    if !digest.rest.is_empty() {
        out.push_str("== More news ==\n\n");
        for entry in &digest.rest {
            out.push_str(&format_entry(&entry.title, entry));
        }
    }

    out
}

fn format_entry(heading: &str, entry: &NewsEntry) -> String {
    let mut block = format!(
        "{}\n   Source: {} (score {})\n",
        heading, entry.source, entry.score
    );

    if !entry.summary.is_empty() {
        block.push_str(&format!("   {}\n", entry.summary));
    }
    if !entry.link.is_empty() {
        block.push_str(&format!("   {}\n", entry.link));
    }

    block.push('\n');
    block
}

#[derive(Serialize)]
struct JsonDigest<'a> {
    generated_at: &'a str,
    highlights: &'a [NewsEntry],
    rest: &'a [NewsEntry],
}

/// Render a digest as pretty-printed JSON
pub fn render_json(digest: &Digest, now: &str) -> DeskResult<String> {
    let json = JsonDigest {
        generated_at: now,
        highlights: &digest.highlights,
        rest: &digest.rest,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, summary: &str, link: &str, score: usize) -> NewsEntry {
        NewsEntry {
            source: "The Decoder".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            summary: summary.to_string(),
            score,
        }
    }

    fn sample() -> Digest {
        Digest {
            highlights: vec![
                entry("Big launch", "A model launched.", "https://a.example/1", 120),
                entry("Second", "", "", 80),
            ],
            rest: vec![entry("Minor", "Small update.", "https://a.example/3", 10)],
        }
    }

    #[test]
    fn test_text_numbers_highlights() {
        let text = render_text(&sample(), "2024-01-15 12:00:00");

        assert!(text.contains("Last updated: 2024-01-15 12:00:00"));
        assert!(text.contains("== Top 2 highlights =="));
        assert!(text.contains("1. Big launch"));
        assert!(text.contains("2. Second"));
        assert!(text.contains("   Source: The Decoder (score 120)"));
        assert!(text.contains("   A model launched."));
        assert!(text.contains("   https://a.example/1"));
    }

    #[test]
    fn test_text_lists_rest_after_highlights() {
        let text = render_text(&sample(), "now");

        let more = text.find("== More news ==").unwrap();
        let minor = text.find("Minor").unwrap();
        assert!(minor > more);
        assert!(!text.contains("3. Minor"));
    }

    #[test]
    fn test_text_skips_empty_fields() {
        let digest = Digest {
            highlights: vec![entry("Bare", "", "", 0)],
            rest: vec![],
        };
        let text = render_text(&digest, "now");

        assert_eq!(
            text,
            "AI News Digest\nLast updated: now\n\n== Top 1 highlights ==\n\n1. Bare\n   Source: The Decoder (score 0)\n\n"
        );
    }

    #[test]
    fn test_text_full_layout() {
        let text = render_text(&sample(), "now");

        assert_eq!(
            text,
            "AI News Digest\nLast updated: now\n\n\
             == Top 2 highlights ==\n\n\
             1. Big launch\n   Source: The Decoder (score 120)\n   A model launched.\n   https://a.example/1\n\n\
             2. Second\n   Source: The Decoder (score 80)\n\n\
             == More news ==\n\n\
             Minor\n   Source: The Decoder (score 10)\n   Small update.\n   https://a.example/3\n\n"
        );
    }

    #[test]
    fn test_text_empty_digest() {
        let text = render_text(&Digest::default(), "now");
        assert_eq!(
            text,
            format!("AI News Digest\nLast updated: now\n\n{}\n", NO_NEWS_MESSAGE)
        );
        assert!(!text.contains("highlights"));
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&sample(), "now").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generated_at"], "now");
        assert_eq!(value["highlights"].as_array().unwrap().len(), 2);
        assert_eq!(value["highlights"][0]["title"], "Big launch");
        assert_eq!(value["highlights"][0]["score"], 120);
        assert_eq!(value["rest"][0]["source"], "The Decoder");
    }

    #[test]
    fn test_now_string_format() {
        let now = now_string();
        assert!(chrono::NaiveDateTime::parse_from_str(&now, "%Y-%m-%d %H:%M:%S").is_ok());
    }
}
