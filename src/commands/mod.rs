//! CLI commands for chatlens

pub mod analyze;
pub mod dispatch;
pub mod lexicon;
pub mod parse;
