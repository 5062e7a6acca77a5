//! The two sides of a game.

use serde::{Deserialize, Serialize};

/// One of the two parties at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    /// The human-controlled party.
    Player,
    /// The party driven by the remote completion service.
    Ai,
}

impl Party {
    /// The other party.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Human"),
            Self::Ai => write!(f, "AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips() {
        assert_eq!(Party::Player.opponent(), Party::Ai);
        assert_eq!(Party::Ai.opponent(), Party::Player);
        assert_eq!(Party::Ai.opponent().opponent(), Party::Ai);
    }

    #[test]
    fn display_names() {
        assert_eq!(Party::Player.to_string(), "Human");
        assert_eq!(Party::Ai.to_string(), "AI");
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Party::Ai).unwrap(), "\"ai\"");
        let p: Party = serde_json::from_str("\"player\"").unwrap();
        assert_eq!(p, Party::Player);
    }
}
