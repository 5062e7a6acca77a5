//! Journal entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::GameEvent;

/// A single timestamped event in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// The event itself.
    pub event: GameEvent,
}

impl JournalEntry {
    /// Stamp an event with the current time.
    pub fn now(event: GameEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}
