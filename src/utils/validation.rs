// file: src/utils/validation.rs
// description: input validation for configuration values, assets and sentences
// reference: input validation patterns

use crate::error::{DepParseError, Result};
use std::fs;
use std::path::Path;

pub const SUPPORTED_CONLL_STYLES: [usize; 3] = [3, 4, 10];

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            DepParseError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(DepParseError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DepParseError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_sha256(digest: &str) -> Result<()> {
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DepParseError::Validation(format!(
                "Not a SHA-256 hex digest: {}",
                digest
            )));
        }
        Ok(())
    }

    pub fn validate_conll_style(style: usize) -> Result<()> {
        if !SUPPORTED_CONLL_STYLES.contains(&style) {
            return Err(DepParseError::Validation(format!(
                "Unsupported CoNLL style {} (expected one of 3, 4, 10)",
                style
            )));
        }
        Ok(())
    }

    /// The engine reads one sentence per line, so a sentence must be a
    /// single non-blank line once normalized.
    pub fn validate_sentence(sentence: &str) -> Result<()> {
        if sentence.trim().is_empty() {
            return Err(DepParseError::Validation("Sentence is empty".to_string()));
        }
        Ok(())
    }

    pub fn normalize_sentence(sentence: &str) -> String {
        sentence.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("stanford-parser.jar");
        fs::write(&file_path, "PK").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://example.com").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_sha256() {
        let digest = "a".repeat(64);
        assert!(Validator::validate_sha256(&digest).is_ok());
        assert!(Validator::validate_sha256("abc").is_err());
        assert!(Validator::validate_sha256(&"z".repeat(64)).is_err());
    }

    #[test]
    fn test_validate_conll_style() {
        assert!(Validator::validate_conll_style(3).is_ok());
        assert!(Validator::validate_conll_style(4).is_ok());
        assert!(Validator::validate_conll_style(10).is_ok());
        assert!(Validator::validate_conll_style(0).is_err());
        assert!(Validator::validate_conll_style(5).is_err());
    }

    #[test]
    fn test_validate_sentence() {
        assert!(Validator::validate_sentence("He hit her").is_ok());
        assert!(Validator::validate_sentence("").is_err());
        assert!(Validator::validate_sentence(" \n ").is_err());
    }

    #[test]
    fn test_normalize_sentence() {
        assert_eq!(
            Validator::normalize_sentence("  She was\nbrave \t"),
            "She was brave"
        );
        assert_eq!(Validator::normalize_sentence("He hit her"), "He hit her");
    }
}
