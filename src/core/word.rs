//! Placed candidate words
//!
//! A `PlacedWord` is a dictionary word that has been given a home inside one
//! panel's content buffer, together with the screen cell of every letter.

use super::geometry::{GridGeometry, GridLocation, ScreenLocation};
use std::fmt;

/// A candidate word placed in the puzzle grid
///
/// Occupies the half-open linear interval `[start, end)` of its panel's
/// buffer. Identity is the text alone: two placed words are equal when their
/// text is equal, wherever they sit.
#[derive(Debug, Clone, Eq)]
pub struct PlacedWord {
    panel: usize,
    start: usize,
    end: usize,
    text: String,
    coordinates: Vec<ScreenLocation>,
}

impl PlacedWord {
    /// Create a word that has not been placed yet
    ///
    /// The placement fields stay empty until [`place_at`](Self::place_at).
    #[must_use]
    pub fn unplaced(text: impl Into<String>) -> Self {
        Self {
            panel: 0,
            start: 0,
            end: 0,
            text: text.into(),
            coordinates: Vec::new(),
        }
    }

    /// Create a word placed at `start` of `panel`, with its screen cells
    #[must_use]
    pub fn placed(
        text: impl Into<String>,
        panel: usize,
        start: usize,
        geometry: &GridGeometry,
    ) -> Self {
        let mut word = Self::unplaced(text);
        word.place_at(panel, start, geometry);
        word
    }

    /// Move the word to `start` of `panel` and recompute its screen cells
    pub fn place_at(&mut self, panel: usize, start: usize, geometry: &GridGeometry) {
        self.panel = panel;
        self.start = start;
        self.end = start + self.text.len();
        self.coordinates = (self.start..self.end)
            .map(|offset| geometry.linear_to_screen(panel, offset))
            .collect();
    }

    /// Reset the placement fields to the empty state
    pub fn clear_placement(&mut self) {
        self.panel = 0;
        self.start = 0;
        self.end = 0;
        self.coordinates.clear();
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn panel(&self) -> usize {
        self.panel
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Screen cell of every letter, in order
    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &[ScreenLocation] {
        &self.coordinates
    }

    /// Whether the two words collide
    ///
    /// Uses closed intervals, so words whose spans merely touch
    /// (`end == other.start`) also count as overlapping. Only meaningful for
    /// words in the same panel.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether the word covers `offset` of `panel`
    #[inline]
    #[must_use]
    pub const fn covers(&self, panel: usize, offset: usize) -> bool {
        self.panel == panel && self.start <= offset && offset < self.end
    }

    /// Whether the word covers a grid location
    #[inline]
    #[must_use]
    pub const fn contains(&self, location: GridLocation, geometry: &GridGeometry) -> bool {
        self.covers(location.panel, geometry.grid_to_linear(location))
    }
}

impl PartialEq for PlacedWord {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
