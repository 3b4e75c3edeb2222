// file: src/parser/output.rs
// description: splits raw engine output into per-sentence parse groups

use crate::error::Result;
use crate::models::DependencyGraph;
use crate::parser::conll::ConllParser;

/// Engine output ends every sentence with one blank line. A blank line with
/// no rows before it is a sentence whose tokens were all dropped by the
/// engine (punctuation only) and still counts as a sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputSplitter;

impl OutputSplitter {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, output: &str) -> Result<Vec<Vec<DependencyGraph>>> {
        let conll = ConllParser::new();
        let mut sentences = Vec::new();
        let mut current_lines: Vec<&str> = Vec::new();

        for line in output.lines() {
            if line.trim().is_empty() {
                sentences.push(vec![conll.parse_block(&current_lines.join("\n"))?]);
                current_lines.clear();
            } else {
                current_lines.push(line);
            }
        }

        // output that stops without a trailing blank line
        if !current_lines.is_empty() {
            sentences.push(vec![conll.parse_block(&current_lines.join("\n"))?]);
        }

        Ok(sentences)
    }
}
