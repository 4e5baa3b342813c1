//! TUI rendering with ratatui
//!
//! Everything is drawn at the absolute screen cells the grid geometry
//! defines, so pointer coordinates reported by the terminal map straight back
//! onto grid cells.

use super::app::App;
use crate::core::{GridLocation, HEADER_HEIGHT, ScreenLocation};
use crate::engine::Outcome;
use crate::output::formatters::{format_address, header_lines};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Columns between the grid and the log panel
const LOG_MARGIN: usize = 2;

/// Width reserved for the log panel
const LOG_WIDTH: usize = 20;

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Rect of `width` cells starting at an absolute screen cell, clipped to the frame
fn cell_rect(f: &Frame, x: usize, y: usize, width: usize) -> Rect {
    Rect::new(to_u16(x), to_u16(y), to_u16(width), 1).intersection(f.area())
}

fn base_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    render_header(f, app);
    render_grid(f, app);
    render_log(f, app);

    if app.session.outcome().is_none() {
        let ScreenLocation { x, y } = app.session.geometry().to_screen(app.session.position());
        let cursor = Position::new(to_u16(x), to_u16(y));
        if f.area().contains(cursor) {
            f.set_cursor_position(cursor);
        }
    }
}

fn render_header(f: &mut Frame, app: &App) {
    let session = &app.session;
    let width = session.geometry().screen_width() + LOG_MARGIN + LOG_WIDTH;

    for (y, text) in header_lines(session.attempts_remaining(), session.max_attempts())
        .into_iter()
        .enumerate()
    {
        let style = if y == 3 && session.attempts_remaining() == 1 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            base_style()
        };
        f.render_widget(Paragraph::new(text).style(style), cell_rect(f, 0, y, width));
    }

    // Status replaces the blank line under the prompt
    let status = match session.outcome() {
        Some(Outcome::Won) => Some(("ACCESS GRANTED. Press any key", Color::LightGreen)),
        Some(Outcome::Lost) => Some(("TERMINAL LOCKED. Press any key", Color::Red)),
        None => None,
    };
    if let Some((text, color)) = status {
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            cell_rect(f, 0, 2, width),
        );
    }
}

fn render_grid(f: &mut Frame, app: &App) {
    let session = &app.session;
    let geometry = session.geometry();
    let position = session.position();
    let selected = session.selected_word();
    let cursor_style = Style::default().fg(Color::Black).bg(Color::LightGreen);
    let selection_style = Style::default().fg(Color::Black).bg(Color::Green);

    for panel in 0..geometry.panels() {
        for row in 0..geometry.rows() {
            let label = geometry.label_screen(panel, row);
            let address = format_address(session.address(panel, row));
            f.render_widget(
                Paragraph::new(address.as_str()).style(base_style()),
                cell_rect(f, label.x, label.y, address.len()),
            );

            let spans: Vec<Span> = session
                .row_text(panel, row)
                .chars()
                .enumerate()
                .map(|(column, cell)| {
                    let location = GridLocation::new(panel, row, column);
                    let offset = geometry.grid_to_linear(location);
                    let style = if location == position && session.outcome().is_none() {
                        cursor_style
                    } else if selected.is_some_and(|word| word.covers(panel, offset)) {
                        selection_style
                    } else {
                        base_style()
                    };
                    Span::styled(cell.to_string(), style)
                })
                .collect();

            let start = geometry.to_screen(GridLocation::new(panel, row, 0));
            f.render_widget(
                Paragraph::new(Line::from(spans)),
                cell_rect(f, start.x, start.y, geometry.columns()),
            );
        }
    }
}

fn render_log(f: &mut Frame, app: &App) {
    let geometry = app.session.geometry();
    let x = geometry.screen_width() + LOG_MARGIN;

    // Newest entry sits on the last grid row
    let rows = geometry.rows();
    let lines = &app.log[app.log.len().saturating_sub(rows)..];
    let top = HEADER_HEIGHT + rows - lines.len();

    for (i, line) in lines.iter().enumerate() {
        f.render_widget(
            Paragraph::new(line.as_str()).style(base_style()),
            cell_rect(f, x, top + i, LOG_WIDTH),
        );
    }

    if let Some(word) = app.session.selected_word() {
        f.render_widget(
            Paragraph::new(format!(">{}", word.text()))
                .style(base_style().add_modifier(Modifier::BOLD)),
            cell_rect(f, x, HEADER_HEIGHT + rows, LOG_WIDTH),
        );
    }
}
