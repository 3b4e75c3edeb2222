// file: src/engine/mod.rs
// description: external dependency parser engine and its client
// reference: internal module structure

pub mod backend;
pub mod client;
pub mod jar;

pub use backend::{ParserBackend, StanfordBackend};
pub use client::{DependencyParser, ParseResults};
