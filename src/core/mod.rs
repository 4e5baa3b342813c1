//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod geometry;
mod likeness;
mod word;

pub use geometry::{
    ADDRESS_WIDTH, GUTTER_WIDTH, GridGeometry, GridLocation, HEADER_HEIGHT, ScreenLocation,
};
pub use likeness::Likeness;
pub use word::PlacedWord;
