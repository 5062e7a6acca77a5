pub mod play;
pub mod roll;
pub mod simulate;

use std::fs;
use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use lad_core::{GameState, InitData, Journal, Party};

/// Load a setup from `path`, or roll one when no file is given.
fn load_init(path: Option<&Path>, seed: Option<u64>, hp: i32) -> Result<InitData, String> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str(&text).map_err(|e| format!("invalid setup file: {e}"))
        }
        None => Ok(roll_init(seed, hp)),
    }
}

fn roll_init(seed: Option<u64>, hp: i32) -> InitData {
    match seed {
        Some(seed) => InitData::roll(&mut StdRng::seed_from_u64(seed), hp),
        None => InitData::roll(&mut rand::rng(), hp),
    }
}

fn write_journal(path: &Path, journal: &Journal) -> Result<(), String> {
    let json = serde_json::to_string_pretty(journal)
        .map_err(|e| format!("cannot serialize journal: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

fn item_names(state: &GameState, party: Party) -> String {
    let items = &state.side(party).items;
    if items.is_empty() {
        return "--".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("c-{} {item}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Both sides at a glance.
fn status_table(state: &GameState) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Side", "Health", "Items"]);
    for party in [Party::Player, Party::Ai] {
        let mut name = party.to_string();
        if party == state.leader && !state.game_over {
            name.push_str(" *");
        }
        table.add_row(vec![
            name,
            format!("{}/{}", state.side(party).health, state.max_health),
            item_names(state, party),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rolls_repeat() {
        assert_eq!(roll_init(Some(7), 3), roll_init(Some(7), 3));
    }

    #[test]
    fn status_table_marks_the_leader() {
        let mut state = GameState::default();
        state.max_health = 3;
        state.player.health = 2;
        state.ai.health = 3;
        state.leader = Party::Ai;
        let rendered = status_table(&state).to_string();
        assert!(rendered.contains("AI *"));
        assert!(rendered.contains("2/3"));
        assert!(rendered.contains("--"));
    }
}
