//! Common-pattern list management
//!
//! Holds the banned substrings consulted by scoring and feedback. A
//! small built-in list applies until a custom file is loaded.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Patterns applied when no custom list has been loaded. Substrings,
/// matched case-insensitively anywhere in the candidate.
const DEFAULT_PATTERNS: &[&str] = &["123", "abc", "qwe", "password", "motdepasse"];

static COMMON_PATTERNS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Patterns file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read patterns file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Patterns file is empty")]
    EmptyFile,
}

/// Returns the patterns file path.
///
/// Priority:
/// 1. Environment variable `PWD_PATTERNS_PATH`
/// 2. Default path `./assets/patterns.txt`
pub fn get_patterns_path() -> PathBuf {
    std::env::var("PWD_PATTERNS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/patterns.txt"))
}

/// Loads a custom common-pattern list from an external file.
///
/// Not required: the built-in defaults apply until this is called.
///
/// # Environment Variable
///
/// Set `PWD_PATTERNS_PATH` to specify a custom patterns file location.
/// If not set, defaults to `./assets/patterns.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_patterns() -> Result<usize, PatternsError> {
    let path = get_patterns_path();
    init_patterns_from_path(&path)
}

/// Loads a custom common-pattern list from a specific file path.
///
/// Use this when the path comes from somewhere other than the
/// environment (e.g. an asset system). One pattern per line; lines are
/// trimmed and lowercased, blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_patterns_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, PatternsError> {
    // Idempotente: se gia inizializzata, ritorna subito
    {
        let guard = COMMON_PATTERNS.read().unwrap();
        if let Some(patterns) = guard.as_ref() {
            return Ok(patterns.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Patterns initialization FAILED: FileNotFound {}", path.display());
        return Err(PatternsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Patterns initialization FAILED: Empty file {}", path.display());
        return Err(PatternsError::EmptyFile);
    }

    let patterns: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = patterns.len();
    {
        let mut guard = COMMON_PATTERNS.write().unwrap();
        *guard = Some(patterns);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Patterns initialized: {} entries from {:?}", count, path);

    Ok(count)
}

/// Returns the active pattern list: the loaded file, or the built-in
/// defaults when no file has been loaded.
pub fn get_patterns() -> Vec<String> {
    let guard = COMMON_PATTERNS.read().unwrap();
    match guard.as_ref() {
        Some(patterns) => patterns.clone(),
        None => DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
    }
}

/// Checks if the candidate contains any active pattern.
///
/// Matching is case-insensitive and positional: a pattern anywhere in
/// the candidate counts, not only whole-string matches.
pub fn contains_common_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PATTERNS.read().unwrap();
    match guard.as_ref() {
        Some(patterns) => patterns.iter().any(|p| lowered.contains(p.as_str())),
        None => DEFAULT_PATTERNS.iter().any(|p| lowered.contains(p)),
    }
}

/// Resets the pattern list for testing purposes.
#[cfg(test)]
pub fn reset_patterns_for_testing() {
    let mut guard = COMMON_PATTERNS.write().unwrap();
    *guard = None;
}
