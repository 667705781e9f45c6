//! newsdesk - AI news digest.
//!
//! Pulls entries from a fixed set of feeds, summarizes each one with a hosted
//! summarization model (or a sentence-truncation fallback), scores them by
//! length and keyword hits, and splits the result into highlights and the rest.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod sources;
pub mod summarizer;
