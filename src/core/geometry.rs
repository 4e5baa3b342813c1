//! Grid geometry and coordinate conversion
//!
//! Three coordinate spaces are in play:
//! - linear offset: index into one panel's flattened content buffer
//! - grid location: (panel, row, column) inside the logical puzzle grid
//! - screen location: absolute (x, y) cell on the display
//!
//! A display row looks like `0xA3F0 ,|!@WORD#$%^  0xA4C0 ...`: an address
//! label, one space, the panel's columns, then a gutter before the next panel.

use std::fmt;

/// Width of the `0xNNNN` address label printed before every panel row
pub const ADDRESS_WIDTH: usize = 6;

/// Blank columns between the end of one panel and the next address label
pub const GUTTER_WIDTH: usize = 2;

/// Screen rows above the first grid row (title, prompt, attempts line)
pub const HEADER_HEIGHT: usize = 5;

/// One character cell of the logical puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridLocation {
    pub panel: usize,
    pub row: usize,
    pub column: usize,
}

impl GridLocation {
    #[must_use]
    pub const fn new(panel: usize, row: usize, column: usize) -> Self {
        Self { panel, row, column }
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.panel, self.row, self.column)
    }
}

/// Absolute display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenLocation {
    pub x: usize,
    pub y: usize,
}

impl ScreenLocation {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the panel grid
///
/// All conversions are pure functions of these three counts and the layout
/// constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    panels: usize,
    rows: usize,
    columns: usize,
}

impl GridGeometry {
    #[must_use]
    pub const fn new(panels: usize, rows: usize, columns: usize) -> Self {
        Self {
            panels,
            rows,
            columns,
        }
    }

    #[inline]
    #[must_use]
    pub const fn panels(&self) -> usize {
        self.panels
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells in one panel's content buffer
    #[inline]
    #[must_use]
    pub const fn panel_capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Horizontal distance between the same column of two adjacent panels
    #[inline]
    const fn panel_stride(&self) -> usize {
        ADDRESS_WIDTH + 1 + self.columns + GUTTER_WIDTH
    }

    /// Total screen width covered by the grid, labels included
    #[must_use]
    pub const fn screen_width(&self) -> usize {
        self.panels * self.panel_stride()
    }

    /// Check that a grid location lies inside the configured bounds
    #[inline]
    #[must_use]
    pub const fn contains(&self, location: GridLocation) -> bool {
        location.panel < self.panels && location.row < self.rows && location.column < self.columns
    }

    /// Convert a grid location to its screen location
    ///
    /// # Examples
    /// ```
    /// use termlink::core::{GridGeometry, GridLocation, ScreenLocation};
    ///
    /// let geometry = GridGeometry::new(3, 20, 12);
    /// let screen = geometry.to_screen(GridLocation::new(1, 2, 3));
    /// assert_eq!(screen, ScreenLocation::new(7 * 2 + 14 + 3, 7));
    /// ```
    #[must_use]
    pub const fn to_screen(&self, location: GridLocation) -> ScreenLocation {
        ScreenLocation {
            x: (ADDRESS_WIDTH + 1) * (location.panel + 1)
                + (GUTTER_WIDTH + self.columns) * location.panel
                + location.column,
            y: HEADER_HEIGHT + location.row,
        }
    }

    /// Convert a screen location back to a grid location
    ///
    /// Exact inverse of [`to_screen`](Self::to_screen) for cells inside the
    /// grid. Locations in the header, an address label or a gutter produce a
    /// result outside the grid bounds; check it with
    /// [`contains`](Self::contains) or use [`resolve`](Self::resolve).
    #[must_use]
    pub const fn to_grid(&self, location: ScreenLocation) -> GridLocation {
        let row = match location.y.checked_sub(HEADER_HEIGHT) {
            Some(row) => row,
            None => usize::MAX,
        };

        match location.x.checked_sub(ADDRESS_WIDTH + 1) {
            Some(shifted) => GridLocation {
                panel: shifted / self.panel_stride(),
                row,
                column: shifted % self.panel_stride(),
            },
            None => GridLocation {
                panel: usize::MAX,
                row,
                column: usize::MAX,
            },
        }
    }

    /// Convert a screen location to a grid location, if it lands on a cell
    #[must_use]
    pub const fn resolve(&self, location: ScreenLocation) -> Option<GridLocation> {
        let grid = self.to_grid(location);
        if self.contains(grid) { Some(grid) } else { None }
    }

    /// Convert a linear offset inside a panel's buffer to a grid location
    #[must_use]
    pub const fn linear_to_grid(&self, panel: usize, offset: usize) -> GridLocation {
        GridLocation {
            panel,
            row: offset / self.columns,
            column: offset % self.columns,
        }
    }

    /// Convert a grid location to a linear offset inside its panel's buffer
    #[must_use]
    pub const fn grid_to_linear(&self, location: GridLocation) -> usize {
        location.row * self.columns + location.column
    }

    /// Convert a linear offset inside a panel's buffer to a screen location
    #[must_use]
    pub const fn linear_to_screen(&self, panel: usize, offset: usize) -> ScreenLocation {
        self.to_screen(self.linear_to_grid(panel, offset))
    }

    /// Screen location of the address label for a panel row
    #[must_use]
    pub const fn label_screen(&self, panel: usize, row: usize) -> ScreenLocation {
        ScreenLocation {
            x: self.panel_stride() * panel,
            y: HEADER_HEIGHT + row,
        }
    }

    /// Cosmetic memory address shown beside a panel row
    #[must_use]
    pub const fn address(&self, base: usize, panel: usize, row: usize) -> usize {
        base + row * self.columns + panel * self.rows * self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_locations(geometry: GridGeometry) -> impl Iterator<Item = GridLocation> {
        (0..geometry.panels()).flat_map(move |panel| {
            (0..geometry.rows()).flat_map(move |row| {
                (0..geometry.columns()).map(move |column| GridLocation::new(panel, row, column))
            })
        })
    }

    #[test]
    fn to_screen_matches_layout() {
        let geometry = GridGeometry::new(3, 20, 12);

        assert_eq!(
            geometry.to_screen(GridLocation::new(0, 0, 0)),
            ScreenLocation::new(7, 5)
        );
        // Second panel starts after label, 12 columns, gutter, next label
        assert_eq!(
            geometry.to_screen(GridLocation::new(1, 0, 0)),
            ScreenLocation::new(7 + 12 + 2 + 7, 5)
        );
        assert_eq!(
            geometry.to_screen(GridLocation::new(2, 19, 11)),
            ScreenLocation::new(7 * 3 + 14 * 2 + 11, 24)
        );
    }

    #[test]
    fn round_trip_every_cell() {
        for geometry in [
            GridGeometry::new(3, 20, 12),
            GridGeometry::new(1, 1, 4),
            GridGeometry::new(4, 3, 1),
        ] {
            for location in all_locations(geometry) {
                let screen = geometry.to_screen(location);
                assert_eq!(geometry.to_grid(screen), location, "via {screen:?}");
                assert_eq!(geometry.resolve(screen), Some(location));
            }
        }
    }

    #[test]
    fn header_and_gutters_are_out_of_range() {
        let geometry = GridGeometry::new(2, 4, 6);

        // Header row
        assert!(!geometry.contains(geometry.to_grid(ScreenLocation::new(8, 0))));
        // Address label of the first panel
        assert!(!geometry.contains(geometry.to_grid(ScreenLocation::new(3, 6))));
        // Gutter right after the first panel
        assert!(!geometry.contains(geometry.to_grid(ScreenLocation::new(7 + 6, 6))));
        assert!(!geometry.contains(geometry.to_grid(ScreenLocation::new(7 + 6 + 1, 6))));
        // Below the last row
        assert_eq!(geometry.resolve(ScreenLocation::new(8, 5 + 4)), None);
        // Right of the last panel
        assert_eq!(geometry.resolve(ScreenLocation::new(200, 6)), None);
    }

    #[test]
    fn linear_conversions() {
        let geometry = GridGeometry::new(3, 20, 12);

        assert_eq!(geometry.linear_to_grid(2, 0), GridLocation::new(2, 0, 0));
        assert_eq!(geometry.linear_to_grid(1, 11), GridLocation::new(1, 0, 11));
        assert_eq!(geometry.linear_to_grid(1, 12), GridLocation::new(1, 1, 0));
        assert_eq!(geometry.linear_to_grid(0, 239), GridLocation::new(0, 19, 11));

        for offset in [0, 5, 12, 100, 239] {
            let location = geometry.linear_to_grid(1, offset);
            assert_eq!(geometry.grid_to_linear(location), offset);
            assert_eq!(
                geometry.linear_to_screen(1, offset),
                geometry.to_screen(location)
            );
        }
    }

    #[test]
    fn labels_sit_left_of_their_panel() {
        let geometry = GridGeometry::new(3, 20, 12);
        for panel in 0..3 {
            let label = geometry.label_screen(panel, 4);
            let first_cell = geometry.to_screen(GridLocation::new(panel, 4, 0));
            assert_eq!(label.y, first_cell.y);
            assert_eq!(label.x + ADDRESS_WIDTH + 1, first_cell.x);
        }
        assert_eq!(geometry.screen_width(), 3 * (7 + 12 + 2));
    }

    #[test]
    fn addresses_follow_buffer_layout() {
        let geometry = GridGeometry::new(3, 20, 12);
        assert_eq!(geometry.address(0xA000, 0, 0), 0xA000);
        assert_eq!(geometry.address(0xA000, 0, 1), 0xA000 + 12);
        assert_eq!(geometry.address(0xA000, 1, 0), 0xA000 + 240);
        assert_eq!(geometry.address(0xA000, 2, 3), 0xA000 + 36 + 480);
    }
}
