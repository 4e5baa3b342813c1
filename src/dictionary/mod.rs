//! Dictionary index
//!
//! Groups the raw dictionary by word length and keeps only the groups large
//! enough to fill a puzzle without starving on duplicate draws.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::error::GameError;
use std::collections::{BTreeMap, BTreeSet};

/// Longest word the index accepts
pub const MAX_WORD_LENGTH: usize = 16;

/// All usable dictionary words of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryGroup {
    length: usize,
    words: Vec<String>,
}

impl DictionaryGroup {
    /// Length shared by every word in the group
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Distinct words of the group, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalize a raw token, or reject it
///
/// Words are upper-cased. Empty tokens, tokens longer than
/// [`MAX_WORD_LENGTH`] and tokens with anything but ASCII letters are skipped.
#[must_use]
pub fn normalize(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || token.len() > MAX_WORD_LENGTH {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(token.to_ascii_uppercase())
}

/// Build the dictionary index
///
/// Returns the groups, ordered by word length, whose size is greater than
/// `2 × words_per_puzzle`.
///
/// # Errors
/// - `GameError::EmptyInput` if no token is usable
/// - `GameError::InsufficientVocabulary` if every group is too small
///
/// # Examples
/// ```
/// use termlink::dictionary::build_index;
///
/// let words = ["cat", "dog", "cow", "pig", "owl", "horse"];
/// let groups = build_index(&words, 2).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].length(), 3);
/// ```
pub fn build_index<S: AsRef<str>>(
    words: &[S],
    words_per_puzzle: usize,
) -> Result<Vec<DictionaryGroup>, GameError> {
    let mut buckets: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    for word in words.iter().filter_map(|w| normalize(w.as_ref())) {
        buckets.entry(word.len()).or_default().insert(word);
    }

    if buckets.is_empty() {
        return Err(GameError::EmptyInput);
    }

    let threshold = words_per_puzzle.saturating_mul(2);
    let groups: Vec<DictionaryGroup> = buckets
        .into_iter()
        .filter(|(_, bucket)| bucket.len() > threshold)
        .map(|(length, bucket)| DictionaryGroup {
            length,
            words: bucket.into_iter().collect(),
        })
        .collect();

    tracing::debug!(
        groups = groups.len(),
        words_per_puzzle,
        "dictionary index built"
    );

    if groups.is_empty() {
        return Err(GameError::InsufficientVocabulary { words_per_puzzle });
    }

    Ok(groups)
}
