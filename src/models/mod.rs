// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod graph;
pub mod tree;
pub mod triple;

pub use graph::{DependencyGraph, Node, Triples};
pub use tree::{Tree, TreeChild};
pub use triple::{DependencyTriple, TaggedWord};
