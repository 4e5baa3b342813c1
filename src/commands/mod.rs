//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationResult, play_game, run_simulation};
