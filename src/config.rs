//! Puzzle configuration

use crate::core::{ADDRESS_WIDTH, GUTTER_WIDTH, GridGeometry, HEADER_HEIGHT};
use crate::engine::{ADDRESS_MAX, ADDRESS_MIN};
use crate::error::GameError;

/// Largest grid whose address labels all fit in four hex digits
pub const MAX_GRID_CELLS: usize = ADDRESS_MAX - ADDRESS_MIN;

/// Largest screen extent a terminal can report
const MAX_SCREEN_EXTENT: usize = u16::MAX as usize;

/// Grid dimensions, puzzle size and attempt budget for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub panels: usize,
    pub rows: usize,
    pub columns: usize,
    pub words: usize,
    pub max_attempts: usize,
}

impl GameConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(
        panels: usize,
        rows: usize,
        columns: usize,
        words: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            panels,
            rows,
            columns,
            words,
            max_attempts,
        }
    }

    /// Check that every count is at least one and the grid fits a terminal
    ///
    /// The grid may hold at most [`MAX_GRID_CELLS`] cells, and its screen
    /// layout must fit in 16-bit terminal coordinates. A grid too small for
    /// the requested words is accepted here; it fails later, during placement.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` naming the first zero field, or the
    /// grid dimension that is too large.
    pub fn validate(&self) -> Result<(), GameError> {
        let fields = [
            ("panels", self.panels),
            ("rows", self.rows),
            ("columns", self.columns),
            ("words", self.words),
            ("attempts", self.max_attempts),
        ];

        if let Some((name, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(GameError::InvalidConfig(format!(
                "{name} must be at least 1"
            )));
        }

        let cells = self
            .panels
            .checked_mul(self.rows)
            .and_then(|n| n.checked_mul(self.columns));
        if cells.is_none_or(|cells| cells > MAX_GRID_CELLS) {
            return Err(GameError::InvalidConfig(format!(
                "grid must have at most {MAX_GRID_CELLS} cells"
            )));
        }

        let width = (ADDRESS_WIDTH + 1 + GUTTER_WIDTH)
            .checked_add(self.columns)
            .and_then(|stride| stride.checked_mul(self.panels));
        if width.is_none_or(|width| width > MAX_SCREEN_EXTENT) {
            return Err(GameError::InvalidConfig(
                "grid is too wide for a terminal".to_string(),
            ));
        }
        if HEADER_HEIGHT.saturating_add(self.rows) > MAX_SCREEN_EXTENT {
            return Err(GameError::InvalidConfig(
                "grid is too tall for a terminal".to_string(),
            ));
        }

        Ok(())
    }

    /// Geometry of the panel grid described by this configuration
    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.panels, self.rows, self.columns)
    }
}

impl Default for GameConfig {
    /// Three panels of 20 rows by 12 columns, 12 words, 4 attempts
    fn default() -> Self {
        Self::new(3, 20, 12, 12, 4)
    }
}
