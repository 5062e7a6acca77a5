//! Item kinds and the outcome of using one.

use serde::{Deserialize, Serialize};

use crate::world::WorldKind;

/// The five item kinds, identified on the wire by codes 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Heals the user by one, up to the health ceiling.
    Restorative,
    /// Keeps the user in the lead through the next resolution.
    Emp,
    /// Doubles the damage of the next world entered.
    Overcharge,
    /// Discards the front world without resolving it.
    Defuse,
    /// Reveals the front world.
    Foresight,
}

impl ItemKind {
    /// All kinds in code order.
    pub const ALL: [ItemKind; 5] = [
        Self::Restorative,
        Self::Emp,
        Self::Overcharge,
        Self::Defuse,
        Self::Foresight,
    ];

    /// Decode a wire code (1-5).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=5 => Some(Self::ALL[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// The wire code (1-5).
    pub fn code(self) -> u8 {
        match self {
            Self::Restorative => 1,
            Self::Emp => 2,
            Self::Overcharge => 3,
            Self::Defuse => 4,
            Self::Foresight => 5,
        }
    }

    /// Display name shown in prompts and narrative.
    pub fn name(self) -> &'static str {
        match self {
            Self::Restorative => "Fountain of Life",
            Self::Emp => "EMP",
            Self::Overcharge => "Steel Torrent",
            Self::Defuse => "Format",
            Self::Foresight => "Yin-Yang Eye",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when an item was used.
///
/// The `*Blocked`, `AtFullHealth` and `PoolEmpty` outcomes leave the
/// item in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Health went up by one.
    Healed {
        /// Health after healing.
        health: i32,
    },
    /// Health is already at the ceiling.
    AtFullHealth,
    /// EMP is now active for this round.
    EmpArmed,
    /// EMP was already active this round.
    EmpBlocked,
    /// The next world deals this much damage.
    Overcharged {
        /// New danger multiplier.
        multiplier: i32,
    },
    /// The front world was discarded.
    Defused {
        /// The discarded world.
        world: WorldKind,
    },
    /// The pool was empty, so there was no world to act on.
    PoolEmpty,
    /// The front world was revealed.
    Revealed {
        /// The revealed world.
        world: WorldKind,
    },
    /// Foresight was already used this round.
    ForesightBlocked,
}

impl ItemEffect {
    /// Whether the item was removed from the inventory.
    pub fn consumed(self) -> bool {
        !matches!(
            self,
            Self::AtFullHealth | Self::EmpBlocked | Self::PoolEmpty | Self::ForesightBlocked
        )
    }
}

impl std::fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healed { health } => write!(f, "recovered one health (now {health})"),
            Self::AtFullHealth => write!(f, "already at maximum health, item not used"),
            Self::EmpArmed => write!(f, "the opponent will be bound"),
            Self::EmpBlocked => write!(f, "EMP already used this round, wait for the next one"),
            Self::Overcharged { multiplier } => {
                write!(f, "the next world deals {multiplier} damage")
            }
            Self::Defused { .. } => write!(f, "the current world was removed"),
            Self::PoolEmpty => write!(f, "no world left in the pool, item not used"),
            Self::Revealed { world } => write!(f, "the current world is a {world}"),
            Self::ForesightBlocked => {
                write!(f, "Yin-Yang Eye already used this round, wait for the next one")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ItemKind::from_code(0), None);
        assert_eq!(ItemKind::from_code(6), None);
    }

    #[test]
    fn blocked_effects_keep_the_item() {
        assert!(!ItemEffect::AtFullHealth.consumed());
        assert!(!ItemEffect::EmpBlocked.consumed());
        assert!(!ItemEffect::ForesightBlocked.consumed());
        assert!(!ItemEffect::PoolEmpty.consumed());
        assert!(ItemEffect::EmpArmed.consumed());
        assert!(ItemEffect::Healed { health: 2 }.consumed());
    }

    #[test]
    fn effect_narrative() {
        let text = ItemEffect::Revealed {
            world: WorldKind::Dangerous,
        }
        .to_string();
        assert_eq!(text, "the current world is a Deadly World");
    }
}
