//! Common-password wordlist
//!
//! A built-in core list that is always active, plus an optional
//! extension loaded once from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Passwords every deployment rejects, baked into the binary.
/// Entries are stored lower-cased; lookups lower-case their input.
const BUILT_IN: &[&str] = &[
    "password",
    "12345678",
    "qwerty123",
    "abc12345",
    "password123",
    "1q2w3e4r",
    "admin123",
    "welcome123",
    "letmein123",
    "monkey123",
    "dragon123",
    "111111",
    "123123",
    "sunshine",
    "master123",
    "shadow123",
    "ashley123",
    "football123",
    "jesus123",
    "michael123",
    "ninja123",
    "mustang123",
    "password1",
    "123456789",
    "princess123",
];

static EXTENSION: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist extension file path.
///
/// Priority:
/// 1. Environment variable `PWD_GUARD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_GUARD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Loads the wordlist extension from an external file.
///
/// The built-in list is always active; calling this is only needed to
/// reject additional deployment-specific passwords.
///
/// # Environment Variable
///
/// Set `PWD_GUARD_WORDLIST_PATH` to specify a custom wordlist file
/// location. If not set, defaults to `./assets/wordlist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
///
/// # Example
///
/// ```rust,ignore
/// // Custom path via environment
/// unsafe { std::env::set_var("PWD_GUARD_WORDLIST_PATH", "/etc/myapp/wordlist.txt"); }
/// pwd_guard::init_wordlist()?;
///
/// // Or use default path
/// pwd_guard::init_wordlist()?;
/// ```
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads the wordlist extension from a specific file path.
///
/// Use this when you need to pass the path directly (e.g., from an
/// asset bundle) instead of relying on environment variables.
///
/// One entry per line; entries are trimmed and lower-cased, empty
/// lines skipped. Returns the number of loaded entries.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    // Idempotent: once loaded, report the existing count
    {
        let guard = EXTENSION.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTENSION.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist extension loaded: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Number of entries consulted by the detector (built-in plus any
/// loaded extension).
pub fn wordlist_size() -> usize {
    let guard = EXTENSION.read().unwrap();
    BUILT_IN.len() + guard.as_ref().map(HashSet::len).unwrap_or(0)
}

/// Runs `matches` over every entry, built-in first, and reports
/// whether any entry satisfied it.
pub(crate) fn any_entry<F>(matches: F) -> bool
where
    F: Fn(&str) -> bool,
{
    if BUILT_IN.iter().any(|entry| matches(entry)) {
        return true;
    }
    let guard = EXTENSION.read().unwrap();
    guard
        .as_ref()
        .map(|ext| ext.iter().any(|entry| matches(entry)))
        .unwrap_or(false)
}

/// Resets the wordlist extension for testing purposes.
#[cfg(test)]
pub(crate) fn reset_wordlist_for_testing() {
    let mut guard = EXTENSION.write().unwrap();
    *guard = None;
}
