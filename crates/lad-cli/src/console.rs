//! Live event printing for interactive games.

use colored::Colorize;

use lad_core::{EventSink, GameEvent, Journal, Party};

/// Prints events as they happen and keeps a journal of them.
pub struct ConsoleSink {
    journal: Journal,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            journal: Journal::new(),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: GameEvent) {
        print_event(&event);
        self.journal.append(event);
    }
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::ResetWorld { msg, worlds, .. } => {
            println!("  {} {msg} ({worlds} new worlds)", "RESET".magenta().bold());
        }
        GameEvent::AiSpeech { message } => {
            println!("  {} {}", "AI:".cyan().bold(), message.italic());
        }
        GameEvent::UseTool(report) => {
            println!("  {} {}", "ITEM".yellow().bold(), report.msg);
        }
        GameEvent::RoundResult(report) => {
            let tag = if report.damage > 0 {
                "HIT".red().bold()
            } else {
                "SAFE".green().bold()
            };
            println!("  {tag}  {}", report.msg);
            println!();
        }
        GameEvent::GameOver { winner } => {
            let line = format!("Game over: {winner} wins.");
            match winner {
                Party::Player => println!("  {}", line.green().bold()),
                Party::Ai => println!("  {}", line.red().bold()),
            }
        }
        GameEvent::DecisionRequested { leader, prompt, .. } => match leader {
            Party::Player => {
                println!("{}", prompt.dimmed());
            }
            Party::Ai => println!("  {}", "AI is deciding...".dimmed()),
        },
    }
}
