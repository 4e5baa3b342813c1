//! Input events understood by a session

use crate::core::ScreenLocation;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One input event, already decoded from the terminal backend
///
/// Quitting is left to the front end: it ends the loop rather than changing
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Arrow-equivalent key
    Move(Direction),
    /// Enter-equivalent key: guess the word under the cursor
    Activate,
    /// Pointer moved or clicked on a non-word cell: move the cursor there
    Point(ScreenLocation),
    /// Pointer click on a word: move the cursor there and guess it
    Click(ScreenLocation),
}
