//! Configuration for a game.

use std::time::Duration;

use chrono::Utc;

use crate::party::Party;

/// Where the clock component of the regeneration seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Read the wall clock at each refill.
    #[default]
    WallClock,
    /// Use a fixed millisecond value, for reproducible refills.
    Fixed(i64),
}

impl SeedSource {
    /// Current millisecond reading.
    pub fn now_millis(self) -> i64 {
        match self {
            Self::WallClock => Utc::now().timestamp_millis(),
            Self::Fixed(millis) => millis,
        }
    }
}

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Pause before each decision prompt.
    pub think_time: Duration,
    /// Clock used when deriving refill seeds.
    pub seed_source: SeedSource,
    /// Who leads when both turn-order dice are equal.
    pub tie_break: Party,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_time: Duration::from_secs(5),
            seed_source: SeedSource::WallClock,
            tie_break: Party::Player,
        }
    }
}

impl GameConfig {
    /// Set the pause before each decision prompt.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Set the refill clock.
    pub fn with_seed_source(mut self, source: SeedSource) -> Self {
        self.seed_source = source;
        self
    }

    /// Set who leads on tied dice.
    pub fn with_tie_break(mut self, party: Party) -> Self {
        self.tie_break = party;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.think_time, Duration::from_secs(5));
        assert_eq!(cfg.seed_source, SeedSource::WallClock);
        assert_eq!(cfg.tie_break, Party::Player);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_think_time(Duration::ZERO)
            .with_seed_source(SeedSource::Fixed(12_345))
            .with_tie_break(Party::Ai);
        assert_eq!(cfg.think_time, Duration::ZERO);
        assert_eq!(cfg.seed_source.now_millis(), 12_345);
        assert_eq!(cfg.tie_break, Party::Ai);
    }

    #[test]
    fn wall_clock_is_recent() {
        // 2020-01-01 in milliseconds.
        assert!(SeedSource::WallClock.now_millis() > 1_577_836_800_000);
    }
}
