//! Formatting utilities for terminal output

use crate::core::HEADER_HEIGHT;
use crate::engine::Evaluation;

/// Banner shown on the first header line
pub const TITLE: &str = "ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL";

/// Header rows drawn above the grid, one per screen line
#[must_use]
pub fn header_lines(remaining: usize, max: usize) -> [String; HEADER_HEIGHT] {
    [
        TITLE.to_string(),
        "ENTER PASSWORD NOW".to_string(),
        String::new(),
        attempts_line(remaining, max),
        String::new(),
    ]
}

/// Format the remaining attempts as filled and empty boxes
#[must_use]
pub fn attempt_boxes(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    let mut boxes: Vec<&str> = vec!["■"; remaining];
    boxes.resize(max, "□");
    boxes.join(" ")
}

/// Attempts line shown under the prompt
#[must_use]
pub fn attempts_line(remaining: usize, max: usize) -> String {
    if remaining == 1 {
        format!("!!! WARNING: LOCKOUT IMMINENT !!!  {}", attempt_boxes(remaining, max))
    } else {
        format!("{remaining} ATTEMPT(S) LEFT: {}", attempt_boxes(remaining, max))
    }
}

/// Format a cosmetic row address
#[must_use]
pub fn format_address(address: usize) -> String {
    format!("0x{address:04X}")
}

/// Terminal log lines produced by one evaluation
#[must_use]
pub fn evaluation_log_lines(evaluation: &Evaluation) -> Vec<String> {
    match evaluation {
        Evaluation::Idle => Vec::new(),
        Evaluation::Denied {
            guess, likeness, ..
        } => vec![
            format!(">{guess}"),
            ">Entry denied".to_string(),
            format!(">Likeness={likeness}"),
        ],
        Evaluation::Won { guess } => vec![
            format!(">{guess}"),
            ">Exact match!".to_string(),
            ">Please wait".to_string(),
            ">while system".to_string(),
            ">is accessed.".to_string(),
        ],
        Evaluation::Lost { guess } => vec![
            format!(">{guess}"),
            ">Entry denied".to_string(),
            ">Lockout in".to_string(),
            ">progress.".to_string(),
        ],
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Likeness;

    #[test]
    fn attempt_boxes_mixed() {
        assert_eq!(attempt_boxes(2, 4), "■ ■ □ □");
        assert_eq!(attempt_boxes(4, 4), "■ ■ ■ ■");
        assert_eq!(attempt_boxes(0, 3), "□ □ □");
        assert_eq!(attempt_boxes(9, 2), "■ ■");
    }

    #[test]
    fn attempts_line_warns_on_last_attempt() {
        assert_eq!(attempts_line(3, 4), "3 ATTEMPT(S) LEFT: ■ ■ ■ □");
        assert!(attempts_line(1, 4).starts_with("!!! WARNING"));
    }

    #[test]
    fn header_fills_rows_above_grid() {
        let lines = header_lines(4, 4);
        assert_eq!(lines.len(), HEADER_HEIGHT);
        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[3], "4 ATTEMPT(S) LEFT: ■ ■ ■ ■");
    }

    #[test]
    fn address_is_four_hex_digits() {
        assert_eq!(format_address(0xA3F0), "0xA3F0");
        assert_eq!(format_address(0xB), "0x000B");
    }

    #[test]
    fn denied_log_reports_likeness() {
        let lines = evaluation_log_lines(&Evaluation::Denied {
            guess: "CRANE".to_string(),
            likeness: Likeness::new(2),
            attempts_remaining: 3,
        });
        assert_eq!(lines, [">CRANE", ">Entry denied", ">Likeness=2"]);
    }

    #[test]
    fn idle_log_is_empty() {
        assert!(evaluation_log_lines(&Evaluation::Idle).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
