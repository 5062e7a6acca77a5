//! Journal storage and export.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::JournalEntry;
use crate::event::{EventSink, GameEvent};

/// A chronological log of one game's events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    game_id: Uuid,
    entries: Vec<JournalEntry>,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            game_id: Uuid::new_v4(),
            entries: Vec::new(),
        }
    }
}

impl Journal {
    /// Create an empty journal with a fresh game id.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the game this journal records.
    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// Append an event, stamped with the current time.
    pub fn append(&mut self, event: GameEvent) {
        self.entries.push(JournalEntry::now(event));
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries whose event has the given wire name.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a JournalEntry> + 'a {
        self.entries.iter().filter(move |e| e.event.name() == name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    ///
    /// Decision prompts are left out; they repeat the status on every turn.
    pub fn export_markdown(&self) -> String {
        let mut out = format!("# Life and Death Journal\n\nGame `{}`\n\n", self.game_id);
        for entry in &self.entries {
            match &entry.event {
                GameEvent::ResetWorld { msg, worlds, .. } => {
                    out.push_str(&format!("**Reset**: {msg} ({worlds} worlds)\n\n"));
                }
                GameEvent::AiSpeech { message } => {
                    out.push_str(&format!("> **AI**: {message}\n\n"));
                }
                GameEvent::UseTool(report) => {
                    out.push_str(&format!(
                        "**{}** used **{}**: {}\n\n",
                        report.actor, report.item, report.effect
                    ));
                }
                GameEvent::RoundResult(report) => {
                    out.push_str(&format!("## Round {}\n\n", report.round));
                    out.push_str(&format!("{}\n\n", report.msg));
                }
                GameEvent::GameOver { winner } => {
                    out.push_str(&format!("**Game over**: {winner} wins.\n\n"));
                }
                GameEvent::DecisionRequested { .. } => {}
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = format!(
            "Life and Death Journal\n======================\nGame {}\n\n",
            self.game_id
        );
        for entry in &self.entries {
            match &entry.event {
                GameEvent::ResetWorld { msg, worlds, .. } => {
                    out.push_str(&format!("Reset: {msg} ({worlds} worlds)\n\n"));
                }
                GameEvent::AiSpeech { message } => {
                    out.push_str(&format!("AI says: {message}\n\n"));
                }
                GameEvent::UseTool(report) => {
                    out.push_str(&format!(
                        "{} used {}: {}\n\n",
                        report.actor, report.item, report.effect
                    ));
                }
                GameEvent::RoundResult(report) => {
                    out.push_str(&format!("--- Round {} ---\n", report.round));
                    out.push_str(&format!("{}\n\n", report.msg));
                }
                GameEvent::GameOver { winner } => {
                    out.push_str(&format!("Game over: {winner} wins.\n\n"));
                }
                GameEvent::DecisionRequested { .. } => {}
            }
        }
        out
    }
}

impl EventSink for Journal {
    fn emit(&mut self, event: GameEvent) {
        self.append(event);
    }
}
