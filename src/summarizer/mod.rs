pub mod traits;
pub mod fallback;
pub mod http_model;
pub mod handle;

pub use traits::{GenerationParams, SummaryModel};
pub use fallback::{summarize_fallback, DEFAULT_MAX_CHARS};
pub use http_model::HttpSummaryModel;
pub use handle::ModelHandle;
