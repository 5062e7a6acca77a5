//! Parsing the leader's choice.

use serde::{Deserialize, Serialize};

use crate::party::Party;

/// Who the leader sends into the next world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Option `a`: the leader goes in.
    Myself,
    /// Option `b`: the opponent goes in.
    Opponent,
}

impl Target {
    /// The party that is sent, given the current leader.
    pub fn party(self, leader: Party) -> Party {
        match self {
            Self::Myself => leader,
            Self::Opponent => leader.opponent(),
        }
    }

    /// The option letter.
    pub fn letter(self) -> char {
        match self {
            Self::Myself => 'a',
            Self::Opponent => 'b',
        }
    }
}

/// A parsed decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// `a` or `b`.
    Enter(Target),
    /// `c-<n>`: use the item at zero-based index `n - 1`.
    UseItem(usize),
}

impl Choice {
    /// Parse `a`, `b` or `c-<n>` (1-based). Surrounding whitespace and
    /// letter case are ignored. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        match input.as_str() {
            "a" => Some(Self::Enter(Target::Myself)),
            "b" => Some(Self::Enter(Target::Opponent)),
            other => {
                let n: usize = other.strip_prefix("c-")?.trim().parse().ok()?;
                n.checked_sub(1).map(Self::UseItem)
            }
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enter(target) => write!(f, "{}", target.letter()),
            Self::UseItem(index) => write!(f, "c-{}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_options() {
        assert_eq!(Choice::parse("a"), Some(Choice::Enter(Target::Myself)));
        assert_eq!(Choice::parse(" B\n"), Some(Choice::Enter(Target::Opponent)));
        assert_eq!(Choice::parse("c-1"), Some(Choice::UseItem(0)));
        assert_eq!(Choice::parse("C-4"), Some(Choice::UseItem(3)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("c-0"), None);
        assert_eq!(Choice::parse("c-"), None);
        assert_eq!(Choice::parse("c-x"), None);
        assert_eq!(Choice::parse("ab"), None);
        assert_eq!(Choice::parse("quit"), None);
    }

    #[test]
    fn target_party() {
        assert_eq!(Target::Myself.party(Party::Ai), Party::Ai);
        assert_eq!(Target::Opponent.party(Party::Ai), Party::Player);
    }

    #[test]
    fn display_matches_wire() {
        assert_eq!(Choice::UseItem(2).to_string(), "c-3");
        assert_eq!(Choice::Enter(Target::Opponent).to_string(), "b");
    }
}
