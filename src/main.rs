// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dependency_parsing::utils::logging::{format_step, format_success, format_warning};
use dependency_parsing::{
    AssetStatus, Config, DEMO_SENTENCES, JsonExporter, ParseRunner, provision_assets,
};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dependency_parsing")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Dependency parsing side tests using the Stanford parser", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the built-in example sentences (the default)
    Demo,

    /// Parse sentences given on the command line or in a file
    Parse {
        /// Sentences to parse
        sentences: Vec<String>,

        /// Read sentences from a file, one per line
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// CoNLL column layout: 3, 4 or 10
        #[arg(short, long, value_name = "N")]
        style: Option<usize>,
    },

    /// Download the parser jars without parsing anything
    Fetch {
        #[arg(long)]
        force: bool,
    },

    /// Parse sentences and write them to a JSON file
    Export {
        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,

        /// Sentences to export; defaults to the example sentences
        sentences: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = cli.color && io::stderr().is_terminal();

    dependency_parsing::utils::logging::init_logger(color, cli.verbose);

    let config_path = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Some(cli.config.as_path())
    } else {
        warn!(
            "Config file {} not found, using defaults and environment overrides",
            cli.config.display()
        );
        None
    };
    let config = Config::load(config_path).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            cmd_parse(&config, &DEMO_SENTENCES, None, color).await?;
        }
        Commands::Parse {
            sentences,
            file,
            style,
        } => {
            let sentences = gather_sentences(sentences, file.as_deref())?;
            cmd_parse(&config, &sentences, style, color).await?;
        }
        Commands::Fetch { force } => {
            cmd_fetch(&config, force, color).await?;
        }
        Commands::Export {
            output,
            pretty,
            sentences,
        } => {
            cmd_export(&config, output, pretty, sentences, color).await?;
        }
    }

    Ok(())
}

async fn cmd_parse<S: AsRef<str>>(
    config: &Config,
    sentences: &[S],
    style: Option<usize>,
    color: bool,
) -> Result<()> {
    let mut runner = ParseRunner::from_config(config, color)
        .await
        .context("Failed to start dependency parser")?;
    if let Some(style) = style {
        runner = runner.with_conll_style(style)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner
        .run(sentences, &mut out)
        .await
        .context("Dependency parsing failed")?;

    Ok(())
}

async fn cmd_fetch(config: &Config, force: bool, color: bool) -> Result<()> {
    info!("Provisioning parser assets");

    let reports = provision_assets(config, force, color)
        .await
        .context("Asset download failed")?;

    let total = reports.len();
    for (idx, report) in reports.iter().enumerate() {
        let detail = match &report.status {
            AssetStatus::Present => format!("{} already at {}", report.name, report.path.display()),
            AssetStatus::Downloaded { bytes } => format!(
                "{} downloaded to {} ({} bytes)",
                report.name,
                report.path.display(),
                bytes
            ),
        };
        println!("{}", format_step(idx + 1, total, &format_success(&detail)));
    }

    Ok(())
}

async fn cmd_export(
    config: &Config,
    output: PathBuf,
    pretty: bool,
    sentences: Vec<String>,
    color: bool,
) -> Result<()> {
    info!("Initializing JSON export");

    let sentences = if sentences.is_empty() {
        DEMO_SENTENCES.iter().map(|s| s.to_string()).collect()
    } else {
        sentences
    };

    let runner = ParseRunner::from_config(config, color)
        .await
        .context("Failed to start dependency parser")?;
    let exported = runner
        .collect(&sentences)
        .await
        .context("Dependency parsing failed")?;

    let exporter = JsonExporter::new(output)?;
    let path = exporter.export(&exported, pretty)?;

    if exported.is_empty() {
        eprintln!("{}", format_warning("No sentences exported"));
    } else {
        eprintln!(
            "{}",
            format_success(&format!(
                "Exported {} sentences to {}",
                exported.len(),
                path.display()
            ))
        );
    }

    Ok(())
}

fn gather_sentences(mut sentences: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sentences from {}", path.display()))?;
        sentences.extend(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }
    Ok(sentences)
}
