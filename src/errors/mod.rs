use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    // Summarization model errors
    #[error("Summarization model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Summarization failed: {0}")]
    ModelInvocation(String),

    // Output errors
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
