//! Minimax worst-case calculation for likeness feedback
//!
//! Given a guess and set of candidates, computes the most candidates that can
//! survive whatever likeness the terminal reports.

use crate::core::{Likeness, PlacedWord};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// A candidate equal to the guess wins outright and is not counted.
///
/// # Examples
/// ```
/// use termlink::core::{GridGeometry, PlacedWord};
/// use termlink::solver::minimax::calculate_max_remaining;
///
/// let geometry = GridGeometry::new(1, 1, 40);
/// let words = vec![
///     PlacedWord::placed("CRANE", 0, 0, &geometry),
///     PlacedWord::placed("SLATE", 0, 10, &geometry),
///     PlacedWord::placed("MOIST", 0, 20, &geometry),
/// ];
/// let candidates: Vec<&PlacedWord> = words.iter().collect();
///
/// // SLATE scores 2 against both CRANE and MOIST
/// assert_eq!(calculate_max_remaining(&words[1], &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &PlacedWord, candidates: &[&PlacedWord]) -> usize {
    group_by_likeness(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the likeness the guess would score against them
fn group_by_likeness(guess: &PlacedWord, candidates: &[&PlacedWord]) -> FxHashMap<Likeness, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if candidate == guess {
            continue;
        }
        let likeness = Likeness::calculate(guess.text(), candidate.text());
        *counts.entry(likeness).or_insert(0) += 1;
    }

    counts
}

/// Select the candidate that minimizes worst-case remaining candidates
///
/// Ties go to the earliest candidate. Returns `None` if there are no
/// candidates.
#[must_use]
pub fn select_best_guess<'a>(candidates: &[&'a PlacedWord]) -> Option<(&'a PlacedWord, usize)> {
    candidates
        .iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|(_, max)| *max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridGeometry;

    fn words(texts: &[&str]) -> Vec<PlacedWord> {
        let geometry = GridGeometry::new(1, 1, 100);
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| PlacedWord::placed(*text, 0, i * 10, &geometry))
            .collect()
    }

    #[test]
    fn max_remaining_all_same_likeness() {
        let words = words(&["AAAAA", "BBBBB", "CCCCC", "DDDDD"]);
        let candidates: Vec<&PlacedWord> = words.iter().collect();

        // Every other word scores 0 against AAAAA
        assert_eq!(calculate_max_remaining(&words[0], &candidates), 3);
    }

    #[test]
    fn max_remaining_single_candidate() {
        let words = words(&["CRANE"]);
        let candidates: Vec<&PlacedWord> = words.iter().collect();
        assert_eq!(calculate_max_remaining(&words[0], &candidates), 0);
    }

    #[test]
    fn best_guess_splits_candidates() {
        // AAABB scores 3, 2, 0 against the others; every other guess
        // leaves two words tied at 0
        let words = words(&["AAAAA", "BBBBB", "CCCCC", "AAABB"]);
        let candidates: Vec<&PlacedWord> = words.iter().collect();

        let (best, max) = select_best_guess(&candidates).unwrap();
        assert_eq!(best.text(), "AAABB");
        assert_eq!(max, 1);
    }

    #[test]
    fn best_guess_of_nothing() {
        assert!(select_best_guess(&[]).is_none());
    }
}
