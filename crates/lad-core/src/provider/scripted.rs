//! A provider that replays a fixed list of moves.

use std::collections::VecDeque;

use async_trait::async_trait;

use super::{Decision, DecisionProvider};

/// Replays queued decisions in order.
///
/// Once the queue runs dry it returns `None`, unless cycling is enabled, in
/// which case it starts over from the first move.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Vec<Decision>,
    queue: VecDeque<Decision>,
    cycle: bool,
    prompts: Vec<String>,
}

impl ScriptedProvider {
    /// Create a provider that plays `decisions` once.
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        let script: Vec<Decision> = decisions.into_iter().collect();
        Self {
            queue: script.iter().cloned().collect(),
            script,
            cycle: false,
            prompts: Vec::new(),
        }
    }

    /// Build from a comma-separated list of actions, e.g. `"c-1, a, b"`.
    pub fn from_moves(moves: &str) -> Self {
        Self::new(
            moves
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(Decision::new),
        )
    }

    /// Start over from the first move when the queue runs dry.
    pub fn cycling(mut self) -> Self {
        self.cycle = true;
        self
    }

    /// Moves not yet played in the current pass.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Every prompt this provider has been shown.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

#[async_trait]
impl DecisionProvider for ScriptedProvider {
    async fn decide(&mut self, prompt: &str) -> Option<Decision> {
        self.prompts.push(prompt.to_string());
        if self.queue.is_empty() && self.cycle {
            self.queue.extend(self.script.iter().cloned());
        }
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plays_in_order_then_fails() {
        let mut p = ScriptedProvider::from_moves("c-1, a,,b");
        assert_eq!(p.remaining(), 3);
        assert_eq!(p.decide("x").await.unwrap().action, "c-1");
        assert_eq!(p.decide("y").await.unwrap().action, "a");
        assert_eq!(p.decide("z").await.unwrap().action, "b");
        assert_eq!(p.decide("w").await, None);
        assert_eq!(p.prompts(), &["x", "y", "z", "w"]);
    }

    #[tokio::test]
    async fn cycling_repeats() {
        let mut p = ScriptedProvider::from_moves("a,b").cycling();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(p.decide("").await.unwrap().action);
        }
        assert_eq!(seen, vec!["a", "b", "a", "b", "a"]);
    }

    #[tokio::test]
    async fn empty_cycling_script_still_fails() {
        let mut p = ScriptedProvider::from_moves("").cycling();
        assert_eq!(p.decide("").await, None);
    }
}
