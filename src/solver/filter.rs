//! Candidate filtering from likeness feedback

use crate::core::{Likeness, PlacedWord};

/// Words not guessed yet
pub fn unguessed<'a>(
    words: &'a [PlacedWord],
    history: &[(String, Likeness)],
) -> Vec<&'a PlacedWord> {
    words
        .iter()
        .filter(|word| history.iter().all(|(guess, _)| guess != word.text()))
        .collect()
}

/// Words that could still be the password
///
/// A word survives when every previous guess, scored against it, reproduces
/// the likeness the terminal reported.
///
/// # Examples
/// ```
/// use termlink::core::{GridGeometry, Likeness, PlacedWord};
/// use termlink::solver::consistent_candidates;
///
/// let geometry = GridGeometry::new(1, 1, 40);
/// let words = vec![
///     PlacedWord::placed("CRANE", 0, 0, &geometry),
///     PlacedWord::placed("SLATE", 0, 10, &geometry),
///     PlacedWord::placed("MOIST", 0, 20, &geometry),
/// ];
/// let history = vec![("CRANE".to_string(), Likeness::new(2))];
///
/// let candidates = consistent_candidates(&words, &history);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "SLATE");
/// ```
pub fn consistent_candidates<'a>(
    words: &'a [PlacedWord],
    history: &[(String, Likeness)],
) -> Vec<&'a PlacedWord> {
    unguessed(words, history)
        .into_iter()
        .filter(|word| {
            history
                .iter()
                .all(|(guess, likeness)| Likeness::calculate(guess, word.text()) == *likeness)
        })
        .collect()
}
