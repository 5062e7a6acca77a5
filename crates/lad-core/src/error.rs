//! Error types for the game engine.

use thiserror::Error;

use crate::engine::Phase;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised when the engine is driven incorrectly.
///
/// Gameplay problems (an invalid choice, an item that cannot be used, a
/// provider that returned nothing) are not errors: they are reported
/// through [`crate::engine::Outcome`] and the event sink.
#[derive(Debug, Error)]
pub enum GameError {
    /// `initialize` was called on an engine that already holds a game.
    #[error("game is already initialized")]
    AlreadyInitialized,

    /// An operation needed initialized state.
    #[error("game has not been initialized")]
    NotInitialized,

    /// The initialization payload failed validation.
    #[error("invalid init data: {0}")]
    InvalidInit(String),

    /// A decision was submitted while the engine was not waiting for one.
    #[error("not awaiting a decision (phase: {0})")]
    NotAwaitingDecision(Phase),

    /// The game has already ended.
    #[error("game is over")]
    GameOver,

    /// A world had to be entered but the pool was empty.
    #[error("world pool is empty")]
    EmptyPool,
}
