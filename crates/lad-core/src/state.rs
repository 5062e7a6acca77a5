//! The mutable game aggregate owned by the engine.

use serde::{Deserialize, Serialize};

use crate::item::ItemKind;
use crate::party::Party;
use crate::world::WorldPool;

/// Per-party state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    /// Current health. Zero or below ends the game.
    pub health: i32,
    /// Inventory in pickup order.
    pub items: Vec<ItemKind>,
    /// Seed reused at every refill.
    pub seed: i64,
}

impl Side {
    /// Whether this side is still alive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Everything the rules read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Completion-service application id for the AI's role.
    pub role_app_id: String,
    /// Health ceiling for restorative items.
    pub max_health: i32,
    /// The human side.
    pub player: Side,
    /// The AI side.
    pub ai: Side,
    /// Worlds still to enter.
    pub worlds: WorldPool,
    /// Round number, starting at 1.
    pub current_round: u32,
    /// The party making the current decision.
    pub leader: Party,
    /// Damage dealt by the next dangerous world.
    pub danger_multiplier: i32,
    /// EMP is armed for the current round.
    pub emp_active: bool,
    /// Foresight was used in the current round.
    pub eye_active: bool,
    /// Set once a party's health reaches zero.
    pub game_over: bool,
    /// Per-turn item codes from the payload, unused by the rules.
    pub turn_items: Vec<u8>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            role_app_id: String::new(),
            max_health: 0,
            player: Side::default(),
            ai: Side::default(),
            worlds: WorldPool::new(),
            current_round: 1,
            leader: Party::Player,
            danger_multiplier: 1,
            emp_active: false,
            eye_active: false,
            game_over: false,
            turn_items: Vec::new(),
        }
    }
}

impl GameState {
    /// Borrow a party's side.
    pub fn side(&self, party: Party) -> &Side {
        match party {
            Party::Player => &self.player,
            Party::Ai => &self.ai,
        }
    }

    /// Mutably borrow a party's side.
    pub fn side_mut(&mut self, party: Party) -> &mut Side {
        match party {
            Party::Player => &mut self.player,
            Party::Ai => &mut self.ai,
        }
    }

    /// The leader's inventory.
    pub fn leader_items(&self) -> &[ItemKind] {
        &self.side(self.leader).items
    }

    /// The surviving party once the game is over.
    pub fn winner(&self) -> Option<Party> {
        self.game_over.then_some(self.leader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let s = GameState::default();
        assert_eq!(s.current_round, 1);
        assert_eq!(s.danger_multiplier, 1);
        assert!(!s.game_over);
        assert!(s.worlds.is_empty());
        assert_eq!(s.winner(), None);
    }

    #[test]
    fn side_access() {
        let mut s = GameState::default();
        s.side_mut(Party::Ai).health = 3;
        s.side_mut(Party::Player).items.push(ItemKind::Emp);
        assert_eq!(s.ai.health, 3);
        assert!(s.ai.is_alive());
        assert!(!s.player.is_alive());
        s.leader = Party::Player;
        assert_eq!(s.leader_items(), &[ItemKind::Emp]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut s = GameState::default();
        s.max_health = 4;
        s.player.items = vec![ItemKind::Defuse, ItemKind::Foresight];
        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
