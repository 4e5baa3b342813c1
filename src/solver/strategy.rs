//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::filter::{consistent_candidates, unguessed};
use crate::core::{Likeness, PlacedWord};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for choosing the next word to guess
pub trait Strategy {
    /// Select the next guess among the placed words, given the feedback so far
    ///
    /// `history` holds every denied guess with the likeness it scored.
    /// Returns `None` if every word has been guessed.
    fn select_guess<'a, R: Rng>(
        &self,
        words: &'a [PlacedWord],
        history: &[(String, Likeness)],
        rng: &mut R,
    ) -> Option<&'a PlacedWord>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Any word not guessed yet
    Random(RandomStrategy),
    /// Any word still consistent with the feedback (default)
    Elimination(EliminationStrategy),
    /// Consistent word with the smallest worst case
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng>(
        &self,
        words: &'a [PlacedWord],
        history: &[(String, Likeness)],
        rng: &mut R,
    ) -> Option<&'a PlacedWord> {
        match self {
            Self::Random(s) => s.select_guess(words, history, rng),
            Self::Elimination(s) => s.select_guess(words, history, rng),
            Self::Minimax(s) => s.select_guess(words, history, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "elimination", "minimax".
    /// Defaults to elimination if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            _ => Self::Elimination(EliminationStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Elimination(_) => "elimination",
            Self::Minimax(_) => "minimax",
        }
    }
}

/// Random strategy
///
/// Guesses any word it has not tried yet, ignoring the likeness feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng>(
        &self,
        words: &'a [PlacedWord],
        history: &[(String, Likeness)],
        rng: &mut R,
    ) -> Option<&'a PlacedWord> {
        unguessed(words, history).choose(rng).copied()
    }
}

/// Elimination strategy
///
/// Guesses a random word that could still be the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EliminationStrategy;

impl Strategy for EliminationStrategy {
    fn select_guess<'a, R: Rng>(
        &self,
        words: &'a [PlacedWord],
        history: &[(String, Likeness)],
        rng: &mut R,
    ) -> Option<&'a PlacedWord> {
        let candidates = consistent_candidates(words, history);
        if let Some(candidate) = candidates.choose(rng) {
            Some(*candidate)
        } else {
            // Feedback contradicts every word; fall back to any untried word
            RandomStrategy.select_guess(words, history, rng)
        }
    }
}

/// Minimax strategy
///
/// Guesses the consistent word whose worst-case feedback leaves the fewest
/// candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a, R: Rng>(
        &self,
        words: &'a [PlacedWord],
        history: &[(String, Likeness)],
        rng: &mut R,
    ) -> Option<&'a PlacedWord> {
        let candidates = consistent_candidates(words, history);
        match super::minimax::select_best_guess(&candidates) {
            Some((best, _)) => Some(best),
            None => RandomStrategy.select_guess(words, history, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridGeometry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<PlacedWord> {
        let geometry = GridGeometry::new(1, 1, 100);
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| PlacedWord::placed(*text, 0, i * 10, &geometry))
            .collect()
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["random", "elimination", "minimax"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("unknown").name(), "elimination");
    }

    #[test]
    fn random_strategy_skips_guessed_words() {
        let words = words(&["CRANE", "SLATE", "MOIST"]);
        let history = vec![
            ("CRANE".to_string(), Likeness::new(0)),
            ("MOIST".to_string(), Likeness::new(0)),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            let guess = RandomStrategy.select_guess(&words, &history, &mut rng).unwrap();
            assert_eq!(guess.text(), "SLATE");
        }
    }

    #[test]
    fn random_strategy_exhausted() {
        let words = words(&["CRANE"]);
        let history = vec![("CRANE".to_string(), Likeness::new(0))];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(RandomStrategy.select_guess(&words, &history, &mut rng).is_none());
    }

    #[test]
    fn elimination_follows_feedback() {
        let words = words(&["CRANE", "SLATE", "MOIST", "TRACE"]);
        let history = vec![("CRANE".to_string(), Likeness::new(4))];
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..10 {
            let guess = EliminationStrategy
                .select_guess(&words, &history, &mut rng)
                .unwrap();
            assert_eq!(guess.text(), "TRACE");
        }
    }

    #[test]
    fn elimination_falls_back_on_contradiction() {
        let words = words(&["CRANE", "SLATE"]);
        // No remaining word scores 5 against CRANE
        let history = vec![("CRANE".to_string(), Likeness::new(5))];
        let mut rng = StdRng::seed_from_u64(3);

        let guess = EliminationStrategy
            .select_guess(&words, &history, &mut rng)
            .unwrap();
        assert_eq!(guess.text(), "SLATE");
    }

    #[test]
    fn minimax_picks_best_splitter() {
        let words = words(&["AAAAA", "BBBBB", "CCCCC", "AAABB"]);
        let mut rng = StdRng::seed_from_u64(4);

        let guess = MinimaxStrategy.select_guess(&words, &[], &mut rng).unwrap();
        assert_eq!(guess.text(), "AAABB");
    }

    #[test]
    fn strategy_type_dispatches() {
        let words = words(&["CRANE", "SLATE", "MOIST", "TRACE"]);
        let history = vec![("CRANE".to_string(), Likeness::new(4))];
        let mut rng = StdRng::seed_from_u64(5);

        let strategy = StrategyType::from_name("minimax");
        let guess = strategy.select_guess(&words, &history, &mut rng).unwrap();
        assert_eq!(guess.text(), "TRACE");
    }
}
