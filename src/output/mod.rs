// file: src/output/mod.rs
// description: text rendering of parse results
// reference: internal module structure

pub mod formatter;

pub use formatter::{ResultFormatter, SentenceSummary};
