// file: src/output/formatter.rs
// description: renders the tree, CoNLL and triple views of each parsed sentence

use crate::error::Result;
use crate::models::DependencyGraph;
use crate::utils::Validator;
use std::io::Write;

pub const TREE_HEADER: &str = "------DEPENDENCY TREE------";
pub const CONLL_HEADER: &str = "------CONLL FORMAT------";
pub const TRIPLES_HEADER: &str = "------DEPENDENCY TRIPLES------";

/// Counts of what one sentence block contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceSummary {
    pub tokens: usize,
    pub triples: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    conll_style: usize,
}

impl ResultFormatter {
    pub fn new(conll_style: usize) -> Result<Self> {
        Validator::validate_conll_style(conll_style)?;
        Ok(Self { conll_style })
    }

    pub fn conll_style(&self) -> usize {
        self.conll_style
    }

    pub fn write_sentence<W: Write>(
        &self,
        graph: &DependencyGraph,
        out: &mut W,
    ) -> Result<SentenceSummary> {
        writeln!(out, "{}", TREE_HEADER)?;
        match graph.tree() {
            Some(tree) => writeln!(out, "{}", tree)?,
            None => writeln!(out)?,
        }

        writeln!(out, "{}", CONLL_HEADER)?;
        writeln!(out, "{}", graph.to_conll(self.conll_style)?)?;

        writeln!(out, "{}", TRIPLES_HEADER)?;
        let mut triples = 0;
        for triple in graph.triples() {
            writeln!(out, "{}", triple)?;
            triples += 1;
        }
        writeln!(out)?;

        Ok(SentenceSummary {
            tokens: graph.len(),
            triples,
        })
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self { conll_style: 4 }
    }
}
