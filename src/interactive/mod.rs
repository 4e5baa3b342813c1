//! Full-screen terminal front end

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
