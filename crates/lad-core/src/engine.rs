//! The game engine.
//!
//! [`LifeAndDeathGame`] owns the [`GameState`] and walks it through an
//! explicit [`Phase`] machine. Each decision is handled by
//! [`LifeAndDeathGame::make_decision`]; entering a world resolves the round
//! and immediately starts the next one, refilling the world pool when it
//! runs dry. Everything worth showing is announced through an
//! [`EventSink`].

use tracing::{debug, info, warn};

use crate::choice::{Choice, Target};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::event::{EventSink, GameEvent, ItemReport, RoundReport};
use crate::init::InitData;
use crate::item::{ItemEffect, ItemKind};
use crate::party::Party;
use crate::prompt::status_prompt;
use crate::provider::DecisionProvider;
use crate::rng::{ITEMS_PER_REFILL, Lcg, derive_seed, generate_items, generate_worlds};
use crate::state::GameState;
use crate::world::WorldKind;

/// Damage multiplier set by an overcharge.
const OVERCHARGE_MULTIPLIER: i32 = 2;

/// Where the engine is in its round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game loaded yet.
    Uninitialized,
    /// Initialized, the next round has not been started.
    RoundPending,
    /// The world pool is being refilled.
    Regenerating,
    /// Waiting for the leader's choice.
    AwaitingDecision,
    /// A world is being entered.
    ResolvingRound,
    /// A party has fallen.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::RoundPending => "round pending",
            Self::Regenerating => "regenerating",
            Self::AwaitingDecision => "awaiting decision",
            Self::ResolvingRound => "resolving round",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// What a single decision did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was not a usable choice. The leader is asked again.
    Invalid {
        /// The rejected input.
        input: String,
    },
    /// An item was used. The leader keeps deciding.
    ItemUsed(ItemReport),
    /// A world was entered and the round resolved.
    RoundResolved(RoundReport),
}

/// A two-party game of sending each other through worlds.
#[derive(Debug)]
pub struct LifeAndDeathGame<S: EventSink> {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    sink: S,
    last_prompt: String,
}

impl<S: EventSink> LifeAndDeathGame<S> {
    /// Create an engine that reports to `sink`. Call
    /// [`initialize`](Self::initialize) before playing.
    pub fn new(config: GameConfig, sink: S) -> Self {
        Self {
            config,
            state: GameState::default(),
            phase: Phase::Uninitialized,
            sink,
            last_prompt: String::new(),
        }
    }

    /// Load the initial setup. Consumes no randomness.
    pub fn initialize(&mut self, init: &InitData) -> GameResult<()> {
        if self.phase != Phase::Uninitialized {
            return Err(GameError::AlreadyInitialized);
        }
        let setup = init.validate()?;

        let leader = match setup.player_die.cmp(&setup.ai_die) {
            std::cmp::Ordering::Greater => Party::Player,
            std::cmp::Ordering::Less => Party::Ai,
            std::cmp::Ordering::Equal => self.config.tie_break,
        };

        let state = &mut self.state;
        state.role_app_id = init.role_app_id.clone();
        state.max_health = setup.hp;
        state.player.health = setup.hp;
        state.ai.health = setup.hp;
        state.player.items = setup.player_items;
        state.ai.items = setup.ai_items;
        state.player.seed = init.player_random;
        state.ai.seed = init.ai_random;
        state.worlds.refill(setup.worlds);
        state.turn_items = init.turn_item.clone();
        state.leader = leader;

        info!(
            hp = setup.hp,
            worlds = state.worlds.len(),
            %leader,
            "game initialized"
        );
        self.phase = Phase::RoundPending;
        Ok(())
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The event sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give back the event sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The most recent status prompt.
    pub fn last_prompt(&self) -> &str {
        &self.last_prompt
    }

    /// Start the next round.
    ///
    /// Ends the game if a party has fallen, refills an empty world pool,
    /// then waits for a decision. Returns the phase reached, which is
    /// either `AwaitingDecision` or `GameOver`.
    pub fn start_round(&mut self) -> GameResult<Phase> {
        match self.phase {
            Phase::Uninitialized => return Err(GameError::NotInitialized),
            Phase::GameOver | Phase::AwaitingDecision => return Ok(self.phase),
            _ => {}
        }
        loop {
            if self.is_game_over() {
                return Ok(Phase::GameOver);
            }
            if self.state.worlds.is_empty() {
                self.regenerate();
                continue;
            }
            info!(
                round = self.state.current_round,
                leader = %self.state.leader,
                worlds = self.state.worlds.len(),
                "round started"
            );
            self.phase = Phase::AwaitingDecision;
            return Ok(self.phase);
        }
    }

    /// Whether a party has fallen.
    ///
    /// The first time this is true the survivor becomes leader and winner
    /// and a `gameOver` event is emitted. Later calls only report.
    pub fn is_game_over(&mut self) -> bool {
        if self.state.game_over {
            return true;
        }
        if self.phase == Phase::Uninitialized {
            return false;
        }
        let player_alive = self.state.player.is_alive();
        if player_alive && self.state.ai.is_alive() {
            return false;
        }
        let winner = if player_alive { Party::Player } else { Party::Ai };
        self.state.game_over = true;
        self.state.leader = winner;
        self.phase = Phase::GameOver;
        info!(%winner, round = self.state.current_round, "game over");
        self.sink.emit(GameEvent::GameOver { winner });
        true
    }

    fn regenerate(&mut self) {
        self.phase = Phase::Regenerating;
        let (player_seed, ai_seed) = (self.state.player.seed, self.state.ai.seed);
        let source = self.config.seed_source;

        let worlds = generate_worlds(&mut Lcg::new(derive_seed(
            player_seed,
            ai_seed,
            source.now_millis(),
        )));
        let mut player_items = generate_items(&mut Lcg::new(derive_seed(
            player_seed,
            ai_seed,
            source.now_millis(),
        )));
        let ai_items = player_items.split_off(ITEMS_PER_REFILL / 2);

        info!(worlds = worlds.len(), "world pool exhausted, regenerating");
        self.sink.emit(GameEvent::ResetWorld {
            msg: "Every world of this round has been entered. Regenerating worlds and items."
                .to_string(),
            worlds: worlds.len(),
            player_items: player_items.clone(),
            ai_items: ai_items.clone(),
        });

        self.state.worlds.refill(worlds);
        self.state.player.items.extend(player_items);
        self.state.ai.items.extend(ai_items);
    }

    /// Wait out the think time, then build the status prompt and announce
    /// that the leader must decide. Returns the prompt.
    ///
    /// Frontends that collect the human's choice themselves call this and
    /// later hand the answer to [`make_decision`](Self::make_decision).
    pub async fn request_decision(&mut self) -> GameResult<String> {
        self.expect_decision()?;
        if !self.config.think_time.is_zero() {
            tokio::time::sleep(self.config.think_time).await;
        }
        let prompt = status_prompt(&self.state);
        debug!(leader = %self.state.leader, %prompt, "decision requested");
        self.last_prompt = prompt.clone();
        self.sink.emit(GameEvent::DecisionRequested {
            leader: self.state.leader,
            round: self.state.current_round,
            prompt: prompt.clone(),
        });
        Ok(prompt)
    }

    /// Ask `provider` for the leader's choice and apply it.
    ///
    /// A provider that returns nothing counts as an invalid choice, so the
    /// engine stays in `AwaitingDecision`.
    pub async fn solicit_decision<P>(&mut self, provider: &mut P) -> GameResult<Outcome>
    where
        P: DecisionProvider + ?Sized,
    {
        let prompt = self.request_decision().await?;
        let leader = self.state.leader;
        let action = match provider.decide(&prompt).await {
            Some(decision) => {
                if let (Party::Ai, Some(message)) = (leader, decision.commentary) {
                    self.sink.emit(GameEvent::AiSpeech { message });
                }
                decision.action
            }
            None => {
                warn!(%leader, "decision provider returned nothing");
                String::new()
            }
        };
        self.make_decision(&action)
    }

    /// Play until a party falls. `ai` decides the AI's turns and `human`
    /// the player's. Returns the winner.
    pub async fn run<A, H>(&mut self, ai: &mut A, human: &mut H) -> GameResult<Party>
    where
        A: DecisionProvider + ?Sized,
        H: DecisionProvider + ?Sized,
    {
        loop {
            if self.start_round()? == Phase::GameOver {
                return Ok(self.state.leader);
            }
            match self.state.leader {
                Party::Ai => self.solicit_decision(ai).await?,
                Party::Player => self.solicit_decision(human).await?,
            };
        }
    }

    /// Apply the leader's choice: `a`, `b` or `c-<n>`.
    ///
    /// Unparseable input and item slots the leader does not hold are
    /// reported as [`Outcome::Invalid`] without changing any state.
    pub fn make_decision(&mut self, input: &str) -> GameResult<Outcome> {
        self.expect_decision()?;
        let leader = self.state.leader;
        let Some(choice) = Choice::parse(input) else {
            warn!(%leader, input, "invalid choice, asking again");
            return Ok(Outcome::Invalid {
                input: input.to_string(),
            });
        };

        match choice {
            Choice::UseItem(index) => {
                if index >= self.state.leader_items().len() {
                    warn!(%leader, input, "no item in that slot, asking again");
                    return Ok(Outcome::Invalid {
                        input: input.to_string(),
                    });
                }
                let report = self.use_item(index);
                if self.state.worlds.is_empty() {
                    self.regenerate();
                    self.phase = Phase::AwaitingDecision;
                }
                Ok(Outcome::ItemUsed(report))
            }
            Choice::Enter(target) => {
                let report = self.enter_world(target)?;
                self.phase = Phase::RoundPending;
                self.start_round()?;
                Ok(Outcome::RoundResolved(report))
            }
        }
    }

    fn expect_decision(&self) -> GameResult<()> {
        match self.phase {
            Phase::AwaitingDecision => Ok(()),
            Phase::GameOver => Err(GameError::GameOver),
            Phase::Uninitialized => Err(GameError::NotInitialized),
            other => Err(GameError::NotAwaitingDecision(other)),
        }
    }

    fn use_item(&mut self, index: usize) -> ItemReport {
        let actor = self.state.leader;
        let item = self.state.leader_items()[index];
        let effect = match item {
            ItemKind::Restorative => {
                let ceiling = self.state.max_health;
                let side = self.state.side_mut(actor);
                if side.health < ceiling {
                    side.health += 1;
                    ItemEffect::Healed {
                        health: side.health,
                    }
                } else {
                    ItemEffect::AtFullHealth
                }
            }
            ItemKind::Emp => {
                if self.state.emp_active {
                    ItemEffect::EmpBlocked
                } else {
                    self.state.emp_active = true;
                    ItemEffect::EmpArmed
                }
            }
            ItemKind::Overcharge => {
                self.state.danger_multiplier = OVERCHARGE_MULTIPLIER;
                ItemEffect::Overcharged {
                    multiplier: OVERCHARGE_MULTIPLIER,
                }
            }
            ItemKind::Defuse => match self.state.worlds.pop() {
                Some(world) => ItemEffect::Defused { world },
                None => ItemEffect::PoolEmpty,
            },
            ItemKind::Foresight => match (self.state.eye_active, self.state.worlds.front()) {
                (true, _) => ItemEffect::ForesightBlocked,
                (false, Some(world)) => {
                    self.state.eye_active = true;
                    ItemEffect::Revealed { world }
                }
                (false, None) => ItemEffect::PoolEmpty,
            },
        };

        if effect.consumed() {
            self.state.side_mut(actor).items.remove(index);
        }
        let report = ItemReport {
            actor,
            index,
            item,
            effect,
            msg: format!("{actor} used {item}: {effect}"),
        };
        debug!(%actor, %item, ?effect, "item used");
        self.sink.emit(GameEvent::UseTool(report.clone()));
        report
    }

    fn enter_world(&mut self, target: Target) -> GameResult<RoundReport> {
        let world = self.state.worlds.pop().ok_or(GameError::EmptyPool)?;
        self.phase = Phase::ResolvingRound;

        let leader = self.state.leader;
        let sent = target.party(leader);
        let damage = if world.is_dangerous() {
            self.state.danger_multiplier
        } else {
            0
        };
        self.state.side_mut(sent).health -= damage;

        let proposed = match (world, target) {
            (WorldKind::Dangerous, _) => sent.opponent(),
            (WorldKind::Safe, Target::Opponent) => leader.opponent(),
            (WorldKind::Safe, Target::Myself) => leader,
        };
        let emp_consumed = self.state.emp_active;
        let next_leader = if emp_consumed { leader } else { proposed };

        let round = self.state.current_round;
        self.state.leader = next_leader;
        self.state.emp_active = false;
        self.state.eye_active = false;
        self.state.danger_multiplier = 1;
        self.state.current_round += 1;

        let who = match target {
            Target::Myself => "themselves",
            Target::Opponent => "the opponent",
        };
        let hurt = if damage > 0 {
            format!("{sent} lost {damage} health")
        } else {
            "nobody was hurt".to_string()
        };
        let held = if emp_consumed { " (EMP held the lead)" } else { "" };
        let report = RoundReport {
            round,
            leader,
            target,
            sent,
            world,
            damage,
            next_leader,
            emp_consumed,
            msg: format!(
                "{leader} sent {who} into a {world}; {hurt}. {next_leader} leads round {}{held}.",
                round + 1
            ),
        };
        info!(round, %leader, %sent, %world, damage, %next_leader, "round resolved");
        self.sink.emit(GameEvent::RoundResult(report.clone()));
        Ok(report)
    }
}
