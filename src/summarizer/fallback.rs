//! Heuristic summary used whenever the model path is unavailable.

/// Default bound for fallback summaries, in characters
pub const DEFAULT_MAX_CHARS: usize = 220;

/// Summarize `text` as its first two sentences, bounded to `max_chars` characters.
///
/// Sentences are approximated by splitting on `". "`. With fewer than two
/// sentences the whole normalized text is truncated instead. Never fails.
pub fn summarize_fallback(text: &str, max_chars: usize) -> String {
    if text.is_empty() || max_chars == 0 {
        return String::new();
    }

    let normalized = text.replace(['\r', '\n'], " ");
    let normalized = normalized.trim();

    let sentences: Vec<&str> = normalized.split(". ").collect();
    if sentences.len() < 2 {
        return truncate_chars(normalized, max_chars);
    }

    let mut summary = sentences[..2].join(". ").trim().to_string();
    if !summary.ends_with('.') {
        summary.push('.');
    }

    if summary.chars().count() <= max_chars {
        return summary;
    }

    // Cut one short of the bound so the closing period still fits
    let mut cut = truncate_chars(&summary, max_chars - 1);
    cut.truncate(cut.trim_end().len());
    if !cut.ends_with('.') {
        cut.push('.');
    }
    cut
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_empty_summary() {
        assert_eq!(summarize_fallback("", DEFAULT_MAX_CHARS), "");
        assert_eq!(summarize_fallback("   \n  ", DEFAULT_MAX_CHARS), "");
    }

    #[test]
    fn test_takes_first_two_sentences() {
        let text = "First sentence. Second sentence. Third sentence.";
        assert_eq!(
            summarize_fallback(text, DEFAULT_MAX_CHARS),
            "First sentence. Second sentence."
        );
    }

    #[test]
    fn test_adds_missing_period() {
        let text = "Alpha. Beta gamma";
        assert_eq!(summarize_fallback(text, DEFAULT_MAX_CHARS), "Alpha. Beta gamma.");
    }

    #[test]
    fn test_newlines_become_spaces() {
        let text = "Line one.\nLine two. Line three.";
        assert_eq!(
            summarize_fallback(text, DEFAULT_MAX_CHARS),
            "Line one. Line two."
        );
    }

    #[test]
    fn test_single_sentence_is_truncated() {
        let text = "a".repeat(500);
        let summary = summarize_fallback(&text, DEFAULT_MAX_CHARS);
        assert_eq!(summary.chars().count(), DEFAULT_MAX_CHARS);
        assert!(!summary.ends_with('.'));
    }

    #[test]
    fn test_single_short_sentence_is_kept_verbatim() {
        assert_eq!(summarize_fallback("  just a headline  ", 220), "just a headline");
    }

    #[test]
    fn test_long_two_sentences_end_with_period_within_bound() {
        let text = format!("{}. {}. tail", "x".repeat(150), "y".repeat(150));
        let summary = summarize_fallback(&text, DEFAULT_MAX_CHARS);

        assert!(summary.ends_with('.'));
        assert_eq!(summary.chars().count(), DEFAULT_MAX_CHARS);
    }

    #[test]
    fn test_cut_at_sentence_boundary_keeps_single_period() {
        // the 11-char cut ends in "bbbb. "
        let summary = summarize_fallback("aaaa bbbb. cccccccccc. dd", 12);
        assert_eq!(summary, "aaaa bbbb.");
    }

    #[test]
    fn test_bound_is_respected_for_any_max() {
        let text = "One two three. Four five six. Seven eight nine. Ten.";
        for max in 0..60 {
            let summary = summarize_fallback(text, max);
            assert!(
                summary.chars().count() <= max,
                "max={} produced {:?}",
                max,
                summary
            );
        }
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let text = "خبر اول درباره هوش مصنوعی. خبر دوم درباره مدل. سوم";
        let summary = summarize_fallback(text, 10);
        assert!(summary.chars().count() <= 10);
        assert!(summary.ends_with('.'));
    }
}
