// file: src/engine/jar.rs
// description: compiled patterns for recognising Stanford parser jars
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    pub static ref MODELS_JAR: Regex = Regex::new(
        r"^stanford-parser-(\d+(?:\.\d+)+)-models\.jar$"
    ).expect("MODELS_JAR regex is valid");

    pub static ref PARSER_JAR: Regex = Regex::new(
        r"^stanford-parser(?:-(\d+(?:\.\d+)+))?\.jar$"
    ).expect("PARSER_JAR regex is valid");
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Version encoded in a models jar name, e.g. `3.9.1` for
/// `stanford-parser-3.9.1-models.jar`.
pub fn models_version(path: &Path) -> Option<String> {
    let name = file_name(path)?;
    MODELS_JAR
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|version| version.as_str().to_string())
}

pub fn is_parser_jar(path: &Path) -> bool {
    file_name(path).is_some_and(|name| PARSER_JAR.is_match(name))
}
