//! Relevance heuristic used to rank entries within one pass.

/// Keywords that mark an entry as relevant, matched case-insensitively
pub const KEYWORDS: &[&str] = &["OpenAI", "Anthropic", "Microsoft", "AI", "LLM", "model"];

/// Points added per matched keyword
pub const KEYWORD_BONUS: usize = 25;

/// Score an entry: summary length in characters, plus a bonus for every
/// keyword found anywhere in the title or raw text. A keyword counts once no
/// matter how often it appears.
pub fn score(title: &str, raw_text: &str, summary: &str) -> usize {
    summary.chars().count() + matched_keywords(title, raw_text).len() * KEYWORD_BONUS
}

/// Keywords present in `title` or `raw_text`
pub fn matched_keywords(title: &str, raw_text: &str) -> Vec<&'static str> {
    let haystack = format!("{} {}", title, raw_text).to_lowercase();

    KEYWORDS
        .iter()
        .copied()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .collect()
}
