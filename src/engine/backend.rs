// file: src/engine/backend.rs
// description: external parser engine invocation through a java child process
// reference: https://docs.rs/tokio/latest/tokio/process

use crate::config::ParserConfig;
use crate::engine::jar;
use crate::error::{DepParseError, Result};
use crate::utils::Validator;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

const STDERR_TAIL_LINES: usize = 20;

/// Something that turns newline-separated sentences into CoNLL text.
pub trait ParserBackend {
    fn execute(&self, input: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct StanfordBackend {
    java_bin: PathBuf,
    classpath: Vec<PathBuf>,
    java_options: Vec<String>,
    main_class: String,
    model_path: String,
    encoding: String,
}

impl StanfordBackend {
    pub fn new(parser_jar: &Path, models_jar: &Path, config: &ParserConfig) -> Result<Self> {
        Validator::validate_file_path(parser_jar)?;
        Validator::validate_file_path(models_jar)?;

        if !jar::is_parser_jar(parser_jar) {
            warn!(
                "Parser jar {} does not look like stanford-parser.jar",
                parser_jar.display()
            );
        }
        match jar::models_version(models_jar) {
            Some(version) => info!("Using Stanford parser models {}", version),
            None => warn!(
                "Could not read a models version from {}",
                models_jar.display()
            ),
        }

        Ok(Self {
            java_bin: resolve_java(&config.java_bin),
            classpath: vec![parser_jar.to_path_buf(), models_jar.to_path_buf()],
            java_options: config.java_options.clone(),
            main_class: config.main_class.clone(),
            model_path: config.model_path.clone(),
            encoding: config.encoding.clone(),
        })
    }

    /// Arguments after the java binary; `-` makes the parser read stdin.
    pub fn command_args(&self) -> Result<Vec<String>> {
        let classpath = std::env::join_paths(&self.classpath)
            .map_err(|e| DepParseError::Validation(format!("Invalid classpath: {}", e)))?;

        let mut args = self.java_options.clone();
        args.extend([
            "-cp".to_string(),
            classpath.to_string_lossy().into_owned(),
            self.main_class.clone(),
            "-model".to_string(),
            self.model_path.clone(),
            "-sentences".to_string(),
            "newline".to_string(),
            "-outputFormat".to_string(),
            "conll2007".to_string(),
            "-encoding".to_string(),
            self.encoding.clone(),
            "-".to_string(),
        ]);
        Ok(args)
    }
}

impl ParserBackend for StanfordBackend {
    async fn execute(&self, input: &str) -> Result<String> {
        let args = self.command_args()?;
        let program = self.java_bin.display().to_string();
        debug!("Running {} {}", program, args.join(" "));

        let mut child = Command::new(&self.java_bin)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| DepParseError::EngineStartup {
                program: program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DepParseError::Engine("child stdin was not captured".to_string()))?;
        let payload = input.as_bytes().to_vec();

        // stdout must drain while stdin is written or a large batch blocks on full pipes
        let write = async move {
            stdin.write_all(&payload).await?;
            stdin.shutdown().await?;
            drop(stdin);
            Ok::<_, std::io::Error>(())
        };
        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DepParseError::Engine(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr_tail(&stderr)
            )));
        }
        written?;

        debug!("Parser engine produced {} bytes", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// A bare `java` defers to `$JAVA_HOME/bin/java` when that exists.
fn resolve_java(configured: &str) -> PathBuf {
    if configured == "java" {
        if let Some(home) = std::env::var_os("JAVA_HOME") {
            let candidate = Path::new(&home).join("bin").join("java");
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(configured)
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
