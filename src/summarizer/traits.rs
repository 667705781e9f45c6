use crate::errors::DeskResult;

/// Generation constraints passed to the summarization model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 60,
            do_sample: false,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait SummaryModel: Send + Sync {
    /// Name used in logs
    fn name(&self) -> String;

    /// Generate a summary of `text`
    fn generate(&self, text: &str) -> DeskResult<String>;
}
