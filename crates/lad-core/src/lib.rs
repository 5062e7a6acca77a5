//! Core engine for Life and Death, a two-party game of sending each other
//! through worlds.
//!
//! A human and an AI take turns leading. The leader either enters the next
//! world, sends the opponent in, or uses an item. Deadly worlds cost health,
//! the world pool and inventories are refilled by a deterministic generator
//! whenever the pool runs dry, and the game ends when a party falls.
//!
//! The engine is driven through [`LifeAndDeathGame`], reports through an
//! [`EventSink`], and asks a [`DecisionProvider`] for each move.

/// Parsing the leader's choice.
pub mod choice;
/// Game configuration.
pub mod config;
/// The round loop and rules.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Engine events and sinks.
pub mod event;
/// The initialization payload and setup roll.
pub mod init;
/// Item kinds and effects.
pub mod item;
/// Chronological record of a game.
pub mod journal;
/// The two parties.
pub mod party;
/// Status prompt construction.
pub mod prompt;
/// Sources of decisions.
pub mod provider;
/// The regeneration generator.
pub mod rng;
/// Mutable game state.
pub mod state;
/// Worlds and the world pool.
pub mod world;

pub use choice::{Choice, Target};
pub use config::{GameConfig, SeedSource};
pub use engine::{LifeAndDeathGame, Outcome, Phase};
pub use error::{GameError, GameResult};
pub use event::{EventSink, GameEvent, ItemReport, NullSink, RoundReport};
pub use init::InitData;
pub use item::{ItemEffect, ItemKind};
pub use journal::Journal;
pub use party::Party;
pub use provider::{Decision, DecisionProvider, ScriptedProvider};
pub use state::GameState;
pub use world::{WorldKind, WorldPool};
