//! Chatlens Core Library
//!
//! Parses exported two-party chat transcripts and derives activity, timing,
//! content and heuristic relationship metrics from them.

pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod text;
pub mod transcript;
