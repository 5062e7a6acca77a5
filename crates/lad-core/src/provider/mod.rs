//! Decision providers: whatever picks the next move for a party.
//!
//! The engine only sees [`DecisionProvider`]. A provider that cannot come
//! up with a move returns `None`; the engine treats that exactly like an
//! invalid choice and asks again.

pub mod completion;
pub mod scripted;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use completion::{CompletionRequest, CompletionResponse, CompletionSession, extract_decision};
pub use scripted::ScriptedProvider;

/// A move together with optional commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The action string: `a`, `b` or `c-<n>`.
    pub action: String,
    /// Free text accompanying the move.
    pub commentary: Option<String>,
}

impl Decision {
    /// A bare action with no commentary.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            commentary: None,
        }
    }

    /// Attach commentary.
    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = Some(commentary.into());
        self
    }
}

/// Supplies moves for one party.
#[async_trait]
pub trait DecisionProvider: Send {
    /// Decide given the status prompt. `None` signals a failure.
    async fn decide(&mut self, prompt: &str) -> Option<Decision>;
}

#[async_trait]
impl<P: DecisionProvider + ?Sized> DecisionProvider for Box<P> {
    async fn decide(&mut self, prompt: &str) -> Option<Decision> {
        (**self).decide(prompt).await
    }
}
