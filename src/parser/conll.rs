// file: src/parser/conll.rs
// description: CoNLL block reader producing dependency graphs
// reference: accepts 3-column (word tag head), 4-column (+ rel) and 10-column CoNLL-X rows

use crate::error::{DepParseError, Result};
use crate::models::graph::ROOT_RELATION;
use crate::models::{DependencyGraph, Node};

pub struct ConllParser;

impl ConllParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses one sentence block (no blank lines inside).
    pub fn parse_block(&self, block: &str) -> Result<DependencyGraph> {
        let mut tokens = Vec::new();

        for (index, line) in block.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let address = tokens.len() + 1;
            tokens.push(Self::parse_row(line, line_number, address)?);
        }

        DependencyGraph::from_tokens(tokens)
    }

    fn parse_row(line: &str, line_number: usize, address: usize) -> Result<Node> {
        let cells: Vec<&str> = if line.contains('\t') {
            line.split('\t').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        let conll_error = |message: String| DepParseError::Conll {
            line: line_number,
            message,
        };
        let parse_number = |cell: &str, what: &str| {
            cell.parse::<usize>()
                .map_err(|_| conll_error(format!("{} `{}` is not a number", what, cell)))
        };

        match cells.as_slice() {
            [word, tag, head] => {
                let head = parse_number(*head, "head")?;
                let rel = if head == 0 { ROOT_RELATION } else { "" };
                Ok(Node::token(address, *word, "_", *tag, *tag, "_", head, rel))
            }
            [word, tag, head, rel] => Ok(Node::token(
                address,
                *word,
                "_",
                *tag,
                *tag,
                "_",
                parse_number(*head, "head")?,
                *rel,
            )),
            [id, word, lemma, ctag, tag, feats, head, rel, _, _] => Ok(Node::token(
                parse_number(*id, "token id")?,
                *word,
                *lemma,
                *ctag,
                *tag,
                *feats,
                parse_number(*head, "head")?,
                *rel,
            )),
            _ => Err(conll_error(format!(
                "expected 3, 4 or 10 columns, found {}",
                cells.len()
            ))),
        }
    }
}

impl Default for ConllParser {
    fn default() -> Self {
        Self::new()
    }
}
