use tracing::warn;

use crate::summarizer::{summarize_fallback, ModelHandle, DEFAULT_MAX_CHARS};

/// Which path produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrigin {
    Model,
    Fallback,
    Empty,
}

pub struct SummaryService {
    model: ModelHandle,
    max_chars: usize,
}

impl SummaryService {
    pub fn new(model: ModelHandle) -> Self {
        Self {
            model,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Summarize `text`, falling back to the heuristic when the model is
    /// unavailable or fails. Never fails itself.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with_origin(text).0
    }

    pub fn summarize_with_origin(&self, text: &str) -> (String, SummaryOrigin) {
        if text.trim().is_empty() {
            return (String::new(), SummaryOrigin::Empty);
        }

        let Some(model) = self.model.get() else {
            return (self.fallback(text), SummaryOrigin::Fallback);
        };

        match model.generate(text) {
            Ok(summary) => (summary.trim().to_string(), SummaryOrigin::Model),
            Err(e) => {
                warn!(model = %model.name(), error = %e, "summarization failed, using fallback");
                (self.fallback(text), SummaryOrigin::Fallback)
            }
        }
    }

    fn fallback(&self, text: &str) -> String {
        summarize_fallback(text, self.max_chars)
    }
}
