pub mod traits;
pub mod rss_atom;

pub use traits::{fetch_or_empty, FeedSource};
pub use rss_atom::RssAtomSource;
