// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DepParseError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "DEPENDENCY_PARSING";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub assets: AssetsConfig,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub parser_jar: AssetConfig,
    pub models_jar: AssetConfig,
    #[serde(default)]
    pub force_download: bool,
}

/// One downloadable resource and where it lives on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetConfig {
    pub path: PathBuf,
    pub url: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    pub java_bin: String,
    pub java_options: Vec<String>,
    pub main_class: String,
    pub model_path: String,
    pub encoding: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub conll_style: usize,
}

impl Config {
    /// Layers built-in defaults, then the TOML file, then `DEPENDENCY_PARSING__*`
    /// variables. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(" ")
            .with_list_parse_key("parser.java_options")
    }

    fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| DepParseError::Config(e.to_string()))?;

        let file = match path {
            Some(path) => config::File::from(path),
            None => config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false),
        };

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(|e| DepParseError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| DepParseError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            assets: AssetsConfig {
                parser_jar: AssetConfig {
                    path: PathBuf::from("assets/stanford-parser.jar"),
                    url: "http://www.trecento.com/dh_lab/nltk_jar/stanford-parser.jar".to_string(),
                    sha256: None,
                },
                models_jar: AssetConfig {
                    path: PathBuf::from("assets/stanford-parser-3.9.1-models.jar"),
                    url: "http://www.trecento.com/dh_lab/nltk_jar/stanford-parser-3.9.1-models.jar"
                        .to_string(),
                    sha256: None,
                },
                force_download: false,
            },
            parser: ParserConfig {
                java_bin: "java".to_string(),
                java_options: vec!["-mx4g".to_string()],
                main_class: "edu.stanford.nlp.parser.lexparser.LexicalizedParser".to_string(),
                model_path: "edu/stanford/nlp/models/lexparser/englishPCFG.ser.gz".to_string(),
                encoding: "utf8".to_string(),
            },
            output: OutputConfig { conll_style: 4 },
        }
    }

    pub fn validate(&self) -> Result<()> {
        for asset in [&self.assets.parser_jar, &self.assets.models_jar] {
            if asset.path.as_os_str().is_empty() {
                return Err(DepParseError::Config(
                    "asset path must not be empty".to_string(),
                ));
            }
            Validator::validate_url(&asset.url)
                .map_err(|e| DepParseError::Config(e.to_string()))?;
            if let Some(digest) = &asset.sha256 {
                Validator::validate_sha256(digest)
                    .map_err(|e| DepParseError::Config(e.to_string()))?;
            }
        }

        if self.parser.java_bin.trim().is_empty() {
            return Err(DepParseError::Config(
                "java_bin must not be empty".to_string(),
            ));
        }

        Validator::validate_conll_style(self.output.conll_style)
            .map_err(|e| DepParseError::Config(e.to_string()))?;

        Ok(())
    }
}
