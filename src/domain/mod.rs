pub mod source;
pub mod entry;
pub mod digest;

pub use source::{default_sources, Source};
pub use entry::{NewsEntry, RawEntry};
pub use digest::Digest;
