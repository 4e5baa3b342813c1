//! Dictionary loading utilities
//!
//! Provides functions to read dictionary files or use the embedded constant.

use std::fs;
use std::io;
use std::path::Path;

/// Load whitespace-delimited tokens from a file
///
/// Tokens are returned as written; normalization happens when the index is
/// built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use termlink::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} tokens", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(tokens_from_str(&content))
}

/// Split text into whitespace-delimited tokens
#[must_use]
pub fn tokens_from_str(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Convert embedded string slice to owned tokens
///
/// # Examples
/// ```
/// use termlink::dictionary::DEFAULT_WORDS;
/// use termlink::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_split_on_any_whitespace() {
        let tokens = tokens_from_str("crane  slate\nirate\t\tgrate\r\n");
        assert_eq!(tokens, ["crane", "slate", "irate", "grate"]);
    }

    #[test]
    fn tokens_from_empty_source() {
        assert!(tokens_from_str("").is_empty());
        assert!(tokens_from_str(" \n\t ").is_empty());
    }

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("/nonexistent/termlink/words.txt").is_err());
    }
}
