// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod assets;
pub mod config;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod models;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use assets::{Asset, AssetProvisioner, AssetStatus, ProvisionReport};
pub use config::{AssetConfig, AssetsConfig, Config, OutputConfig, ParserConfig};
pub use engine::{DependencyParser, ParseResults, ParserBackend, StanfordBackend};
pub use error::{DepParseError, Result};
pub use exporter::{ExportedSentence, JsonExporter};
pub use models::{DependencyGraph, DependencyTriple, Node, TaggedWord, Tree, TreeChild};
pub use output::{ResultFormatter, SentenceSummary};
pub use parser::{ConllParser, OutputSplitter};
pub use pipeline::{DEMO_SENTENCES, ParseRunner, RunStats, provision_assets};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _formatter = ResultFormatter::default();
    }
}
