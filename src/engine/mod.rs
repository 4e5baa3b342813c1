//! Puzzle engine
//!
//! Word placement, the per-session random sources and the session state
//! machine.

mod input;
mod placement;
mod rng;
mod session;

pub use input::{Direction, Input};
pub use placement::{PLACEMENT_ROUNDS, place_word};
pub use rng::SessionRng;
pub use session::{
    ADDRESS_MAX, ADDRESS_MIN, DECOY_SYMBOLS, Evaluation, Outcome, Phase, SELECTION_ROUNDS, Session,
};
