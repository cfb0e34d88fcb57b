pub mod support;

mod analyze;
mod config;
mod lexicon;
mod logging;
mod misc;
mod parse;
