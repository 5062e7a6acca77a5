//! Events announced by the engine and the sinks that receive them.
//!
//! Every variant keeps a human-readable `msg` alongside structured fields,
//! and serializes under the event name external frontends listen for
//! (`resetWorld`, `aiSpeek`, `useTool`, `roundResult`, `gameOver`).

use serde::{Deserialize, Serialize};

use crate::choice::Target;
use crate::item::{ItemEffect, ItemKind};
use crate::party::Party;
use crate::world::WorldKind;

/// Summary of one item use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    /// Who used the item.
    pub actor: Party,
    /// Zero-based inventory slot.
    pub index: usize,
    /// The item.
    pub item: ItemKind,
    /// What it did.
    pub effect: ItemEffect,
    /// Narrative text.
    pub msg: String,
}

/// Summary of one resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The round that was resolved.
    pub round: u32,
    /// Who decided.
    pub leader: Party,
    /// The option picked.
    pub target: Target,
    /// Who went into the world.
    pub sent: Party,
    /// The world that was entered.
    pub world: WorldKind,
    /// Health lost by the sent party.
    pub damage: i32,
    /// Who decides next round.
    pub next_leader: Party,
    /// Whether an armed EMP kept the leader in place.
    pub emp_consumed: bool,
    /// Narrative text.
    pub msg: String,
}

/// Something the outside world may want to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    /// The world pool ran out and was refilled along with both inventories.
    #[serde(rename = "resetWorld")]
    ResetWorld {
        /// Narrative text.
        msg: String,
        /// Size of the new pool.
        worlds: usize,
        /// Items added to the player.
        player_items: Vec<ItemKind>,
        /// Items added to the AI.
        ai_items: Vec<ItemKind>,
    },
    /// Free-text commentary returned with the AI's move.
    #[serde(rename = "aiSpeek")]
    AiSpeech {
        /// What the AI said.
        message: String,
    },
    /// An item was used.
    #[serde(rename = "useTool")]
    UseTool(ItemReport),
    /// A world was entered and the round resolved.
    #[serde(rename = "roundResult")]
    RoundResult(RoundReport),
    /// A party's health reached zero.
    #[serde(rename = "gameOver")]
    GameOver {
        /// The surviving party.
        winner: Party,
    },
    /// The leader is being asked to decide.
    #[serde(rename = "decisionRequested")]
    DecisionRequested {
        /// Who must decide.
        leader: Party,
        /// Current round.
        round: u32,
        /// The status prompt shown to the leader.
        prompt: String,
    },
}

impl GameEvent {
    /// The wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResetWorld { .. } => "resetWorld",
            Self::AiSpeech { .. } => "aiSpeek",
            Self::UseTool(_) => "useTool",
            Self::RoundResult(_) => "roundResult",
            Self::GameOver { .. } => "gameOver",
            Self::DecisionRequested { .. } => "decisionRequested",
        }
    }
}

/// Receives engine events. Emission is fire-and-forget.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: GameEvent);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
