//! The status prompt shown to whoever must decide.

use crate::item::ItemKind;
use crate::party::Party;
use crate::state::GameState;

fn item_list(items: &[ItemKind]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|i| i.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the status prompt for the current leader.
///
/// Lists both parties' health and inventories, the remaining world counts,
/// the fixed options `a`/`b`, and one `c-<n>` option per item the leader
/// holds. The AI's prompt also states the expected reply format.
pub fn status_prompt(state: &GameState) -> String {
    let mut out = String::from("Health and items\n");
    out.push_str(&format!("Human health: {};\n", state.player.health));
    out.push_str(&format!("Human items: {};\n", item_list(&state.player.items)));
    out.push_str(&format!("AI health: {};\n", state.ai.health));
    out.push_str(&format!("AI items: {};\n", item_list(&state.ai.items)));
    out.push_str(&format!(
        "Deadly worlds: {};\n",
        state.worlds.dangerous_count()
    ));
    out.push_str(&format!("Safe worlds: {};\n", state.worlds.safe_count()));
    out.push_str(&format!(
        "-------------- {} -- choose --------------\n",
        state.leader
    ));
    out.push_str("a. send yourself into the next world;\n");
    out.push_str("b. send your opponent into the next world;\n");
    for (i, item) in state.leader_items().iter().enumerate() {
        out.push_str(&format!("c-{}. {};\n", i + 1, item.name()));
    }
    if state.leader == Party::Ai {
        out.push_str(
            "Reply with a JSON object such as {\"action\": \"a\", \"message\": \"...\"}.\n",
        );
    }
    out
}
