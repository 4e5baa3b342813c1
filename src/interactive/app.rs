//! TUI application state and logic

use crate::core::ScreenLocation;
use crate::engine::{Direction, Input, Outcome, Session};
use crate::output::formatters::evaluation_log_lines;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What a key press asks the front end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(Input),
    Quit,
}

/// Application state
pub struct App {
    pub session: Session,
    /// Terminal log lines, oldest first
    pub log: Vec<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            session,
            log: Vec::new(),
            should_quit: false,
        }
    }

    /// Map a key to an action, if it has one
    #[must_use]
    pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Input(Input::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s' | 'S') => {
                KeyAction::Input(Input::Move(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a' | 'A') => {
                KeyAction::Input(Input::Move(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d' | 'D') => {
                KeyAction::Input(Input::Move(Direction::Right))
            }
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Input(Input::Activate),
            _ => return None,
        };
        Some(action)
    }

    /// Handle a key press
    ///
    /// # Errors
    ///
    /// Returns an error if the session rejects the input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match Self::key_action(key) {
            Some(KeyAction::Quit) => self.should_quit = true,
            Some(KeyAction::Input(Input::Activate)) if self.session.selected_word().is_none() => {}
            Some(KeyAction::Input(input)) => self.apply(input)?,
            None => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    ///
    /// A left press on a word guesses it, anywhere else on the grid it moves
    /// the cursor. Plain pointer motion also moves the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the session rejects the input.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let screen = ScreenLocation::new(usize::from(mouse.column), usize::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let input = self.session.pointer_input(screen);
                self.apply(input)
            }
            MouseEventKind::Moved => self.apply(Input::Point(screen)),
            _ => Ok(()),
        }
    }

    fn apply(&mut self, input: Input) -> Result<()> {
        self.session.submit_input(input)?;
        let evaluation = self.session.evaluate()?;
        self.log.extend(evaluation_log_lines(&evaluation));

        // The log panel is as tall as the grid
        let keep = self.session.geometry().rows();
        if self.log.len() > keep {
            self.log.drain(..self.log.len() - keep);
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// Returns the outcome, or `None` if the player quit first.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: &mut App) -> Result<Option<Outcome>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<Option<Outcome>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let event = event::read()?;

        // Finished: any key leaves
        if let Some(outcome) = app.session.outcome() {
            if matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press) {
                return Ok(Some(outcome));
            }
            continue;
        }

        match event {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
            Event::Mouse(mouse) => app.handle_mouse(mouse)?,
            _ => {}
        }

        if app.should_quit {
            tracing::info!("player quit");
            return Ok(None);
        }
    }
}
