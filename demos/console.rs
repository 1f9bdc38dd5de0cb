//! Console Number Guessing
//!
//! A line-based presentation layer over the game state machine.
//!
//! Key concepts:
//! - The presentation layer only calls machine operations and renders results
//! - Feedback text and tone come from the library
//! - Phase decides which input the next line is for
//!
//! Run with: cargo run --example console
//! Set RUST_LOG=numguess=debug to watch the machine's tracing output.

use numguess::{DifficultyTier, Feedback, GameStateMachine, Phase, Tone};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn render(feedback: &Feedback) {
    let marker = match feedback.tone {
        Tone::Hint => "  ",
        Tone::Info => "..",
        Tone::Success => "**",
        Tone::Error => "!!",
    };
    println!("{marker} {feedback}");
}

fn prompt(machine: &GameStateMachine) -> &'static str {
    match (machine.phase(), machine.selected_tier()) {
        (Phase::InProgress, _) => "Enter your guess",
        (Phase::Won, _) => "Type 'restart' to play again",
        (_, None) => "Choose difficulty (easy, medium, hard)",
        (_, Some(_)) => "Enter the top number of the range",
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== Number Guessing Game ===");
    println!("Commands: easy, medium, hard, restart, quit\n");

    let mut machine = GameStateMachine::new();
    let stdin = io::stdin();

    loop {
        print!("{}> ", prompt(&machine));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "restart" => {
                machine.reset();
                println!();
                continue;
            }
            _ => {}
        }

        if let Ok(tier) = input.parse::<DifficultyTier>() {
            render(&Feedback::from(&machine.select_difficulty(tier)));
            continue;
        }

        if machine.phase() == Phase::InProgress {
            render(&Feedback::for_guess(&machine.make_guess(input)));
        } else {
            render(&Feedback::for_start(&machine.start_game(input)));
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}
