use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use lad_core::{GameConfig, Journal, LifeAndDeathGame, Party, Phase, ScriptedProvider, SeedSource};

/// Decisions allowed per round before the run is called off. Stops scripts
/// that only ever name items the side does not hold.
const DECISIONS_PER_ROUND: u32 = 32;

pub struct SimulateOptions {
    pub init: Option<PathBuf>,
    pub seed: Option<u64>,
    pub hp: i32,
    pub player_moves: String,
    pub ai_moves: String,
    pub max_rounds: u32,
    pub clock_ms: Option<i64>,
    pub journal: Option<PathBuf>,
    pub format: String,
}

pub async fn run(opts: SimulateOptions) -> Result<(), String> {
    if !matches!(opts.format.as_str(), "markdown" | "md" | "text") {
        return Err(format!(
            "unknown format '{}' (expected markdown or text)",
            opts.format
        ));
    }
    let init = super::load_init(opts.init.as_deref(), opts.seed, opts.hp)?;
    let seed_source = opts.clock_ms.map_or(SeedSource::WallClock, SeedSource::Fixed);
    let config = GameConfig::default()
        .with_think_time(Duration::ZERO)
        .with_seed_source(seed_source);

    let mut game = LifeAndDeathGame::new(config, Journal::new());
    game.initialize(&init).map_err(|e| e.to_string())?;

    let mut human = ScriptedProvider::from_moves(&opts.player_moves).cycling();
    let mut ai = ScriptedProvider::from_moves(&opts.ai_moves).cycling();

    let max_decisions = opts.max_rounds.saturating_mul(DECISIONS_PER_ROUND);
    let mut decisions = 0;
    game.start_round().map_err(|e| e.to_string())?;
    while game.phase() == Phase::AwaitingDecision
        && game.state().current_round <= opts.max_rounds
        && decisions < max_decisions
    {
        let provider = match game.state().leader {
            Party::Ai => &mut ai,
            Party::Player => &mut human,
        };
        game.solicit_decision(provider)
            .await
            .map_err(|e| e.to_string())?;
        decisions += 1;
    }

    let journal = game.sink();
    let report = match opts.format.as_str() {
        "text" => journal.export_text(),
        _ => journal.export_markdown(),
    };
    print!("{report}");

    let state = game.state();
    match state.winner() {
        Some(winner) => println!("  {} {winner} wins.", "Winner:".bold()),
        None => println!(
            "  {}",
            format!(
                "Stopped after {} rounds without a winner.",
                state.current_round - 1
            )
            .yellow()
        ),
    }
    println!("{}", super::status_table(state));

    if let Some(path) = &opts.journal {
        super::write_journal(path, journal)?;
    }
    Ok(())
}
