// file: src/exporter/json.rs
// description: json export of parsed sentences

use crate::error::{DepParseError, Result};
use crate::models::{DependencyGraph, DependencyTriple, Node};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const EXPORT_FILE_NAME: &str = "parses.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedSentence {
    pub sentence: String,
    pub tree: Option<String>,
    pub conll: String,
    pub tokens: Vec<Node>,
    pub triples: Vec<DependencyTriple>,
}

impl ExportedSentence {
    pub fn new(sentence: &str, graph: &DependencyGraph, conll_style: usize) -> Result<Self> {
        Ok(Self {
            sentence: sentence.to_string(),
            tree: graph.tree().map(|tree| tree.to_string()),
            conll: graph.to_conll(conll_style)?,
            tokens: graph.tokens().cloned().collect(),
            triples: graph.triples().collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub exported_at: String,
    pub total_sentences: usize,
    pub sentences: &'a [ExportedSentence],
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| DepParseError::file(&output_dir, e))?;
        Ok(Self { output_dir })
    }

    pub fn export(&self, sentences: &[ExportedSentence], pretty: bool) -> Result<PathBuf> {
        let document = ExportDocument {
            exported_at: Utc::now().to_rfc3339(),
            total_sentences: sentences.len(),
            sentences,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        let path = self.output_dir.join(EXPORT_FILE_NAME);
        fs::write(&path, json).map_err(|e| DepParseError::file(&path, e))?;

        info!(
            "Exported {} sentences to {}",
            sentences.len(),
            path.display()
        );
        Ok(path)
    }
}
