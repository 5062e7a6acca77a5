//! The one-shot initialization payload.
//!
//! Field names match the payload produced by the setup process, so an
//! `InitData` can be read straight from its JSON.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::item::ItemKind;
use crate::rng::ITEMS_PER_REFILL;
use crate::world::WorldKind;

/// Completion-service application ids, one per playable role.
pub const ROLE_APP_IDS: [&str; 6] = [
    "role-wanderer",
    "role-oracle",
    "role-gambler",
    "role-engineer",
    "role-medic",
    "role-ghost",
];

/// Initialization payload supplied once by the setup process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitData {
    /// Completion-service application id for the AI's role.
    #[serde(rename = "roleAppId", default)]
    pub role_app_id: String,
    /// The AI's random seed.
    pub ai_random: i64,
    /// Starting (and maximum) health for both parties.
    pub hp: i32,
    /// Eight item codes: the first four are the player's, the rest the AI's.
    pub items: Vec<u8>,
    /// The player's random seed.
    pub player_random: i64,
    /// Turn-order dice: index 0 is the AI's, index 1 the player's.
    pub turn_begin: Vec<u32>,
    /// Per-turn item codes. Carried but not used by the rules.
    #[serde(default)]
    pub turn_item: Vec<u8>,
    /// World flags in entry order: 1 is dangerous, 0 is safe.
    pub worlds: Vec<u8>,
}

/// A validated payload, decoded into engine types.
#[derive(Debug, Clone)]
pub(crate) struct Setup {
    pub(crate) hp: i32,
    pub(crate) worlds: Vec<WorldKind>,
    pub(crate) player_items: Vec<ItemKind>,
    pub(crate) ai_items: Vec<ItemKind>,
    pub(crate) ai_die: u32,
    pub(crate) player_die: u32,
}

impl InitData {
    /// Roll a fresh setup, standing in for the external dice roll.
    ///
    /// Draws two d6 turn-order dice, two seeds below 1000, eight item
    /// codes, one to eight world flags and a role.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, hp: i32) -> Self {
        let world_count = rng.random_range(1..=8);
        Self {
            role_app_id: ROLE_APP_IDS[rng.random_range(0..ROLE_APP_IDS.len())].to_string(),
            ai_random: rng.random_range(0..1000),
            hp,
            items: (0..ITEMS_PER_REFILL)
                .map(|_| rng.random_range(1..=5))
                .collect(),
            player_random: rng.random_range(0..1000),
            turn_begin: vec![rng.random_range(1..=6), rng.random_range(1..=6)],
            turn_item: vec![rng.random_range(1..=5), rng.random_range(1..=5)],
            worlds: (0..world_count)
                .map(|_| u8::from(rng.random_bool(0.5)))
                .collect(),
        }
    }

    /// Check the payload and decode it.
    pub(crate) fn validate(&self) -> GameResult<Setup> {
        if self.hp <= 0 {
            return Err(GameError::InvalidInit(format!(
                "hp must be positive, got {}",
                self.hp
            )));
        }
        if self.items.len() != ITEMS_PER_REFILL {
            return Err(GameError::InvalidInit(format!(
                "expected {ITEMS_PER_REFILL} items, got {}",
                self.items.len()
            )));
        }
        let &[ai_die, player_die] = self.turn_begin.as_slice() else {
            return Err(GameError::InvalidInit(format!(
                "expected 2 turn-order dice, got {}",
                self.turn_begin.len()
            )));
        };

        let items = self
            .items
            .iter()
            .map(|&code| {
                ItemKind::from_code(code)
                    .ok_or_else(|| GameError::InvalidInit(format!("unknown item code {code}")))
            })
            .collect::<GameResult<Vec<_>>>()?;
        let worlds = self
            .worlds
            .iter()
            .map(|&flag| {
                WorldKind::from_flag(flag)
                    .ok_or_else(|| GameError::InvalidInit(format!("invalid world flag {flag}")))
            })
            .collect::<GameResult<Vec<_>>>()?;

        let (player_items, ai_items) = items.split_at(ITEMS_PER_REFILL / 2);
        Ok(Setup {
            hp: self.hp,
            worlds,
            player_items: player_items.to_vec(),
            ai_items: ai_items.to_vec(),
            ai_die,
            player_die,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> InitData {
        InitData {
            role_app_id: "role-oracle".to_string(),
            ai_random: 244,
            hp: 2,
            items: vec![3, 4, 1, 2, 3, 2, 5, 4],
            player_random: 84,
            turn_begin: vec![4, 5],
            turn_item: vec![2, 2],
            worlds: vec![1, 0, 1, 1, 1, 0],
        }
    }

    #[test]
    fn parses_wire_json() {
        let json = r#"{
            "roleAppId": "abc",
            "ai_random": 244,
            "hp": 2,
            "items": [3, 4, 1, 2, 3, 2, 5, 4],
            "player_random": 84,
            "turn_begin": [4, 5],
            "turn_item": [2, 2],
            "worlds": [1, 0, 1, 1, 1, 0]
        }"#;
        let data: InitData = serde_json::from_str(json).unwrap();
        assert_eq!(data.role_app_id, "abc");
        assert_eq!(data.turn_begin, vec![4, 5]);
        assert_eq!(data.worlds.len(), 6);
    }

    #[test]
    fn role_and_turn_item_are_optional() {
        let json = r#"{"ai_random":1,"hp":3,"items":[1,1,1,1,2,2,2,2],
            "player_random":2,"turn_begin":[1,2],"worlds":[0]}"#;
        let data: InitData = serde_json::from_str(json).unwrap();
        assert!(data.role_app_id.is_empty());
        assert!(data.turn_item.is_empty());
    }

    #[test]
    fn validate_splits_items() {
        let setup = sample().validate().unwrap();
        assert_eq!(setup.player_items.len(), 4);
        assert_eq!(setup.ai_items.len(), 4);
        assert_eq!(setup.player_items[0], ItemKind::Overcharge);
        assert_eq!(setup.ai_items[0], ItemKind::Overcharge);
        assert_eq!(setup.ai_items[2], ItemKind::Foresight);
        assert_eq!(setup.ai_die, 4);
        assert_eq!(setup.player_die, 5);
        assert_eq!(setup.worlds[0], WorldKind::Dangerous);
    }

    #[test]
    fn validate_rejects_bad_payloads() {
        let mut data = sample();
        data.hp = 0;
        assert!(matches!(data.validate(), Err(GameError::InvalidInit(_))));

        let mut data = sample();
        data.items.pop();
        assert!(data.validate().is_err());

        let mut data = sample();
        data.items[0] = 9;
        assert!(data.validate().is_err());

        let mut data = sample();
        data.worlds.push(3);
        assert!(data.validate().is_err());

        let mut data = sample();
        data.turn_begin = vec![6];
        assert!(data.validate().is_err());
    }

    #[test]
    fn rolled_setup_is_valid_and_reproducible() {
        let a = InitData::roll(&mut StdRng::seed_from_u64(7), 3);
        let b = InitData::roll(&mut StdRng::seed_from_u64(7), 3);
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
        assert!((1..=8).contains(&a.worlds.len()));
        assert!(ROLE_APP_IDS.contains(&a.role_app_id.as_str()));
    }
}
