//! Worlds and the FIFO pool they are drawn from.
//!
//! Each round consumes the world at the front of the pool. Safe and
//! dangerous counts are derived from the queue itself, so they can never
//! drift from its contents.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Whether entering a world hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldKind {
    /// Entering costs nothing.
    Safe,
    /// Entering costs health.
    Dangerous,
}

impl WorldKind {
    /// Decode a wire flag: `1` is dangerous, `0` is safe.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Safe),
            1 => Some(Self::Dangerous),
            _ => None,
        }
    }

    /// Encode as a wire flag.
    pub fn flag(self) -> u8 {
        match self {
            Self::Safe => 0,
            Self::Dangerous => 1,
        }
    }

    /// Whether this world deals damage.
    pub fn is_dangerous(self) -> bool {
        self == Self::Dangerous
    }
}

impl std::fmt::Display for WorldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe World"),
            Self::Dangerous => write!(f, "Deadly World"),
        }
    }
}

/// The queue of worlds still to be entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPool {
    worlds: VecDeque<WorldKind>,
}

impl WorldPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pool contents.
    pub fn refill(&mut self, worlds: impl IntoIterator<Item = WorldKind>) {
        self.worlds = worlds.into_iter().collect();
    }

    /// The world that the next entry will consume.
    pub fn front(&self) -> Option<WorldKind> {
        self.worlds.front().copied()
    }

    /// Remove and return the front world.
    pub fn pop(&mut self) -> Option<WorldKind> {
        self.worlds.pop_front()
    }

    /// Worlds left in the pool.
    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    /// Whether the pool is exhausted.
    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// Number of dangerous worlds left.
    pub fn dangerous_count(&self) -> usize {
        self.worlds.iter().filter(|w| w.is_dangerous()).count()
    }

    /// Number of safe worlds left.
    pub fn safe_count(&self) -> usize {
        self.len() - self.dangerous_count()
    }

    /// Iterate in entry order.
    pub fn iter(&self) -> impl Iterator<Item = WorldKind> + '_ {
        self.worlds.iter().copied()
    }
}

impl FromIterator<WorldKind> for WorldPool {
    fn from_iter<I: IntoIterator<Item = WorldKind>>(iter: I) -> Self {
        Self {
            worlds: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decode() {
        assert_eq!(WorldKind::from_flag(1), Some(WorldKind::Dangerous));
        assert_eq!(WorldKind::from_flag(0), Some(WorldKind::Safe));
        assert_eq!(WorldKind::from_flag(2), None);
        assert_eq!(WorldKind::Dangerous.flag(), 1);
    }

    #[test]
    fn counts_follow_contents() {
        let mut pool: WorldPool = [1, 0, 1, 1]
            .into_iter()
            .filter_map(WorldKind::from_flag)
            .collect();
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.dangerous_count(), 3);
        assert_eq!(pool.safe_count(), 1);

        assert_eq!(pool.pop(), Some(WorldKind::Dangerous));
        assert_eq!(pool.front(), Some(WorldKind::Safe));
        assert_eq!(pool.dangerous_count(), 2);
        assert_eq!(pool.safe_count(), 1);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut pool = WorldPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.pop(), None);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn refill_replaces() {
        let mut pool: WorldPool = [WorldKind::Safe].into_iter().collect();
        pool.refill([WorldKind::Dangerous, WorldKind::Dangerous]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.safe_count(), 0);
    }
}
