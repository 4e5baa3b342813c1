//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use crate::engine::{Outcome, Session};
use colored::Colorize;

/// Print the end-of-session banner
pub fn print_outcome(session: &Session) {
    match session.outcome() {
        Some(Outcome::Won) => {
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!("{}", "  TERMINAL UNLOCKED".bright_green().bold());
            println!("{}", "═".repeat(50).bright_cyan());
            println!(
                "\n  Password {} accepted with {} of {} attempts left\n",
                session.solution().bright_yellow().bold(),
                session.attempts_remaining(),
                session.max_attempts()
            );
        }
        Some(Outcome::Lost) => {
            println!("\n{}", "═".repeat(50).red());
            println!("{}", "  TERMINAL LOCKED".red().bold());
            println!("{}", "═".repeat(50).red());
            println!(
                "\n  The password was {}\n",
                session.solution().bright_yellow().bold()
            );
        }
        None => {
            println!("\n{}\n", "Session aborted, terminal still locked".yellow());
        }
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won:              {}", format!("{}", result.won).green());
    println!("   Lost:             {}", format!("{}", result.lost).red());
    println!(
        "   Wrong guesses:    {:.2} per win",
        result.average_wrong_guesses()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.won > 0 {
        println!(
            "\n📈 {}",
            "Wrong guesses before the win:".bright_cyan().bold()
        );
        for (&wrong, &count) in &result.wrong_guess_distribution {
            let pct = count as f64 / result.won as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {wrong}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if result.failed > 0 {
        println!(
            "\n⚠️  {} sessions failed to initialize:",
            format!("{}", result.failed).yellow().bold()
        );
        for (message, count) in &result.failures {
            println!("   {count:5} × {message}");
        }
    }
}
