//! Error taxonomy for the puzzle engine

use crate::core::GridLocation;
use thiserror::Error;

/// Errors produced while building or playing a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The dictionary source yielded no usable word at all
    #[error("dictionary contains no usable words")]
    EmptyInput,

    /// Every word-length group was too small for the requested puzzle size
    #[error("no word group is large enough for {words_per_puzzle} words per puzzle")]
    InsufficientVocabulary { words_per_puzzle: usize },

    /// The placement retry budget ran out before every word found a spot
    #[error("could only place {placed} of {requested} words in the grid")]
    PlacementExhausted { placed: usize, requested: usize },

    /// An activation was evaluated with no placed word under the cursor
    #[error("activation at {location} does not select any word")]
    InvalidActivation { location: GridLocation },

    /// The session already reached a terminal phase
    #[error("session is over")]
    SessionOver,

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
