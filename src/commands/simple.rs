//! Simple line-mode play
//!
//! Text-based terminal session without the full-screen TUI. The board is
//! printed with the same layout the TUI uses, so `click X Y` takes the screen
//! coordinates of a cell as shown.

use crate::core::{GUTTER_WIDTH, ScreenLocation};
use crate::engine::{Direction, Input, Outcome, Session};
use crate::output::formatters::{evaluation_log_lines, format_address, header_lines};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Log lines kept on screen
const LOG_LINES: usize = 12;

/// One parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One or more cursor steps, e.g. `ddd`
    Moves(Vec<Direction>),
    /// Guess the word under the cursor
    Enter,
    /// Press on a screen cell
    Click(ScreenLocation),
    Help,
    Quit,
}

/// Parse one input line
///
/// Returns `None` for anything that is not a command.
///
/// # Examples
/// ```
/// use termlink::commands::simple::{Command, parse_command};
/// use termlink::engine::Direction;
///
/// assert_eq!(
///     parse_command("dds"),
///     Some(Command::Moves(vec![Direction::Right, Direction::Right, Direction::Down]))
/// );
/// assert_eq!(parse_command("quit"), Some(Command::Quit));
/// assert_eq!(parse_command("jump"), None);
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_lowercase();
    let mut parts = line.split_whitespace();
    let head = parts.next()?;

    let command = match head {
        "quit" | "q" | "exit" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        "enter" | "e" => Command::Enter,
        "up" => Command::Moves(vec![Direction::Up]),
        "down" => Command::Moves(vec![Direction::Down]),
        "left" => Command::Moves(vec![Direction::Left]),
        "right" => Command::Moves(vec![Direction::Right]),
        "click" => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Command::Click(ScreenLocation::new(x, y))
        }
        keys => Command::Moves(
            keys.chars()
                .map(|key| match key {
                    'w' => Some(Direction::Up),
                    's' => Some(Direction::Down),
                    'a' => Some(Direction::Left),
                    'd' => Some(Direction::Right),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?,
        ),
    };

    if parts.next().is_some() {
        return None;
    }
    Some(command)
}

/// Run the line-mode front end until the session ends or the player quits
///
/// Returns the outcome, or `None` if the player quit.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or if the session rejects
/// an input it should have accepted.
pub fn run_simple(session: &mut Session) -> Result<Option<Outcome>> {
    let mut log: Vec<String> = Vec::new();
    print_help();

    loop {
        print_board(session, &log);

        let Some(line) = get_user_input("command")? else {
            // End of input
            return Ok(None);
        };
        let Some(command) = parse_command(&line) else {
            println!("{}", "Unknown command, type 'help' for the list".red());
            continue;
        };

        let input = match command {
            Command::Quit => return Ok(None),
            Command::Help => {
                print_help();
                continue;
            }
            Command::Moves(directions) => {
                for direction in directions {
                    session.submit_input(Input::Move(direction))?;
                }
                continue;
            }
            Command::Enter if session.selected_word().is_some() => Input::Activate,
            Command::Enter => {
                println!("{}", "No word under the cursor".yellow());
                continue;
            }
            Command::Click(screen) => session.pointer_input(screen),
        };

        session.submit_input(input)?;
        let evaluation = session.evaluate()?;
        log.extend(evaluation_log_lines(&evaluation));

        if let Some(outcome) = session.outcome() {
            print_board(session, &log);
            return Ok(Some(outcome));
        }
    }
}

fn print_help() {
    println!("\n{}", "Commands:".bright_cyan().bold());
    println!("  w/a/s/d      move (repeatable, e.g. 'ddd')");
    println!("  up/down/left/right");
    println!("  enter, e     guess the word under the cursor");
    println!("  click X Y    press screen cell (X, Y)");
    println!("  quit, q      leave the terminal\n");
}

fn print_board(session: &Session, log: &[String]) {
    let geometry = session.geometry();
    let position = session.position();
    let selected = session.selected_word();

    println!();
    for line in header_lines(session.attempts_remaining(), session.max_attempts()) {
        if session.attempts_remaining() == 1 && line.starts_with('!') {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line.green());
        }
    }

    for row in 0..geometry.rows() {
        let mut out = String::new();
        for panel in 0..geometry.panels() {
            if panel > 0 {
                out.push_str(&" ".repeat(GUTTER_WIDTH));
            }
            out.push_str(&format!(
                "{} ",
                format_address(session.address(panel, row)).green()
            ));

            let text = session.row_text(panel, row);
            for (column, cell) in text.chars().enumerate() {
                let offset = row * geometry.columns() + column;
                let cell = cell.to_string();
                let is_cursor = position.panel == panel
                    && position.row == row
                    && position.column == column;
                let in_selection = selected.is_some_and(|word| word.covers(panel, offset));

                let styled = if is_cursor {
                    cell.black().on_bright_green()
                } else if in_selection {
                    cell.black().on_green()
                } else {
                    cell.green()
                };
                out.push_str(&styled.to_string());
            }
        }
        println!("{out}");
    }

    let cursor = geometry.to_screen(position);
    println!(
        "\n{} ({}, {}){}",
        "cursor".bright_black(),
        cursor.x,
        cursor.y,
        selected.map_or_else(String::new, |word| format!("  >{}", word.text()))
    );
    for line in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        println!("{}", line.green());
    }
}

/// Prompt and read one line; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
