// file: src/engine/client.rs
// description: dependency parser client turning sentence batches into parse results
// reference: one engine round trip per batch, results in input order

use crate::engine::backend::ParserBackend;
use crate::error::{DepParseError, Result};
use crate::models::DependencyGraph;
use crate::parser::OutputSplitter;
use crate::utils::Validator;
use tracing::{debug, info};

pub struct DependencyParser<B> {
    backend: B,
    splitter: OutputSplitter,
}

impl<B: ParserBackend> DependencyParser<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            splitter: OutputSplitter::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Parses every sentence in one engine call. The outer iterator yields
    /// one item per input sentence, in order; each item is advanced once to
    /// obtain that sentence's graph.
    pub async fn raw_parse_sents<S: AsRef<str>>(&self, sentences: &[S]) -> Result<ParseResults> {
        if sentences.is_empty() {
            debug!("No sentences to parse, skipping parser engine");
            return Ok(ParseResults::default());
        }

        let mut input = String::new();
        for sentence in sentences {
            let sentence = sentence.as_ref();
            Validator::validate_sentence(sentence)?;
            input.push_str(&Validator::normalize_sentence(sentence));
            input.push('\n');
        }

        info!("Parsing {} sentences", sentences.len());
        let output = self.backend.execute(&input).await?;
        let parses = self.splitter.split(&output)?;

        if parses.len() != sentences.len() {
            return Err(DepParseError::Engine(format!(
                "expected {} parsed sentences, engine returned {}",
                sentences.len(),
                parses.len()
            )));
        }

        Ok(ParseResults {
            inner: parses.into_iter(),
        })
    }

    pub async fn raw_parse(&self, sentence: &str) -> Result<DependencyGraph> {
        self.raw_parse_sents(&[sentence])
            .await?
            .next()
            .and_then(|mut parses| parses.next())
            .ok_or_else(|| DepParseError::Engine(format!("no parse returned for `{}`", sentence)))
    }
}

/// Per-sentence parse sequences, in input order.
#[derive(Debug, Default)]
pub struct ParseResults {
    inner: std::vec::IntoIter<Vec<DependencyGraph>>,
}

impl Iterator for ParseResults {
    type Item = std::vec::IntoIter<DependencyGraph>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vec::into_iter)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParseResults {}
