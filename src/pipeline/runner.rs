// file: src/pipeline/runner.rs
// description: coordinates asset provisioning, parsing and result rendering
// reference: sequential run, one engine call per sentence batch

use crate::assets::{Asset, AssetProvisioner, ProvisionReport};
use crate::config::Config;
use crate::engine::{DependencyParser, ParserBackend, StanfordBackend};
use crate::error::{DepParseError, Result};
use crate::exporter::ExportedSentence;
use crate::output::ResultFormatter;
use crate::pipeline::progress::RunStats;
use std::io::Write;
use std::time::Instant;
use tracing::info;

pub const DEMO_SENTENCES: [&str; 7] = [
    "The quick brown fox jumped over the lazy dog",
    "He walked with her",
    "He walked by her",
    "I'm not going to tell you about her",
    "She has two rooms",
    "She was brave",
    "He hit her",
];

/// Downloads whatever assets are missing and returns their reports,
/// parser jar first.
pub async fn provision_assets(
    config: &Config,
    force: bool,
    colored: bool,
) -> Result<Vec<ProvisionReport>> {
    let assets = Asset::from_assets_config(&config.assets);
    AssetProvisioner::new(force || config.assets.force_download)
        .with_progress(colored)
        .ensure(&assets)
        .await
}

pub struct ParseRunner<B> {
    parser: DependencyParser<B>,
    formatter: ResultFormatter,
}

impl ParseRunner<StanfordBackend> {
    /// Provisions both jars and starts a runner on the Stanford backend.
    pub async fn from_config(config: &Config, colored: bool) -> Result<Self> {
        let reports = provision_assets(config, false, colored).await?;
        let [parser_jar, models_jar] = reports.as_slice() else {
            return Err(DepParseError::Config(format!(
                "expected 2 parser assets, got {}",
                reports.len()
            )));
        };

        let backend = StanfordBackend::new(&parser_jar.path, &models_jar.path, &config.parser)?;
        let formatter = ResultFormatter::new(config.output.conll_style)?;
        Ok(Self::new(DependencyParser::new(backend), formatter))
    }
}

impl<B: ParserBackend> ParseRunner<B> {
    pub fn new(parser: DependencyParser<B>, formatter: ResultFormatter) -> Self {
        Self { parser, formatter }
    }

    pub fn with_conll_style(mut self, style: usize) -> Result<Self> {
        self.formatter = ResultFormatter::new(style)?;
        Ok(self)
    }

    /// Parses `sentences` and writes one three-section block per sentence,
    /// in input order.
    pub async fn run<S, W>(&self, sentences: &[S], out: &mut W) -> Result<RunStats>
    where
        S: AsRef<str>,
        W: Write,
    {
        let start = Instant::now();
        let mut stats = RunStats::new();

        let results = self.parser.raw_parse_sents(sentences).await?;
        for (sentence, mut parses) in sentences.iter().zip(results) {
            let graph = parses.next().ok_or_else(|| {
                DepParseError::Engine(format!("no parse for `{}`", sentence.as_ref()))
            })?;
            let summary = self.formatter.write_sentence(&graph, out)?;
            stats.record_sentence(summary.tokens, summary.triples);
        }
        out.flush()?;

        stats.duration = start.elapsed();
        info!(
            "Parsed {} sentences ({} tokens, {} triples) in {:.2}s ({:.1}/s, {:.1} tokens avg)",
            stats.sentences,
            stats.tokens,
            stats.triples,
            stats.duration.as_secs_f64(),
            stats.sentences_per_second(),
            stats.average_tokens()
        );
        Ok(stats)
    }

    pub async fn collect<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<ExportedSentence>> {
        let results = self.parser.raw_parse_sents(sentences).await?;
        let mut exported = Vec::with_capacity(results.len());
        for (sentence, mut parses) in sentences.iter().zip(results) {
            let sentence = sentence.as_ref();
            let graph = parses
                .next()
                .ok_or_else(|| DepParseError::Engine(format!("no parse for `{}`", sentence)))?;
            exported.push(ExportedSentence::new(
                sentence,
                &graph,
                self.formatter.conll_style(),
            )?);
        }
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(&'static str);

    impl ParserBackend for FixedBackend {
        async fn execute(&self, _input: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn runner(output: &'static str) -> ParseRunner<FixedBackend> {
        ParseRunner::new(
            DependencyParser::new(FixedBackend(output)),
            ResultFormatter::default(),
        )
    }

    #[tokio::test]
    async fn test_run_collects_stats() {
        let runner = runner("He\tPRP\t2\tnsubj\nhit\tVBD\t0\troot\nher\tPRP\t2\tdobj\n\n");
        let mut out = Vec::new();
        let stats = runner.run(&["He hit her"], &mut out).await.unwrap();

        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.tokens, 3);
        assert_eq!(stats.triples, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("------DEPENDENCY TREE------\n(hit He her)\n"));
        assert_eq!(stats.average_tokens(), 3.0);
    }

    #[tokio::test]
    async fn test_collect_and_restyle() {
        let runner = runner("Hello\tUH\t0\troot\n\n").with_conll_style(3).unwrap();
        let exported = runner.collect(&["Hello"]).await.unwrap();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].conll, "Hello\tUH\t0\n");
        assert!(exported[0].triples.is_empty());
    }

    #[test]
    fn test_demo_sentences() {
        assert_eq!(DEMO_SENTENCES.len(), 7);
        assert!(DEMO_SENTENCES.contains(&"She has two rooms"));
    }
}
