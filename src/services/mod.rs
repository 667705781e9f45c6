pub mod summary_service;
pub mod scoring_service;
pub mod aggregation_service;
pub mod render_service;

pub use summary_service::{SummaryOrigin, SummaryService};
pub use scoring_service::{matched_keywords, score, KEYWORDS, KEYWORD_BONUS};
pub use aggregation_service::{rank, AggregationService};
pub use render_service::{now_string, render_json, render_text, NO_NEWS_MESSAGE};
