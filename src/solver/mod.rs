//! Guessing strategies
//!
//! Automatic players used by the simulator. A strategy only sees the placed
//! words and the likeness feedback so far, never the password.

mod filter;
pub mod minimax;
pub mod strategy;

pub use filter::{consistent_candidates, unguessed};
pub use strategy::{EliminationStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
