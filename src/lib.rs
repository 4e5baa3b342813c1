//! Termlink
//!
//! A terminal password-hacking puzzle. Candidate words of one length are
//! hidden among decoy symbols in several memory-dump panels; each wrong guess
//! costs an attempt and reports its likeness to the password.
//!
//! # Quick Start
//!
//! ```rust
//! use termlink::config::GameConfig;
//! use termlink::dictionary::DEFAULT_WORDS;
//! use termlink::engine::{Evaluation, Input, Session, SessionRng};
//!
//! let mut session = Session::initialize(
//!     GameConfig::default(),
//!     DEFAULT_WORDS,
//!     SessionRng::seed_from_u64(42),
//! )
//! .unwrap();
//!
//! // Click the first letter of a placed word
//! let target = session.placed_words()[0].coordinates()[0];
//! session.submit_input(Input::Click(target)).unwrap();
//! let evaluation = session.evaluate().unwrap();
//! assert_ne!(evaluation, Evaluation::Idle);
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Error taxonomy
pub mod error;

// Word lists
pub mod dictionary;

// Placement and session state machine
pub mod engine;

// Automatic players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
