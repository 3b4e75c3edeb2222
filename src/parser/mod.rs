// file: src/parser/mod.rs
// description: parser engine output readers
// reference: internal module structure

pub mod conll;
pub mod output;

pub use conll::ConllParser;
pub use output::OutputSplitter;
