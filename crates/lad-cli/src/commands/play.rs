use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use lad_core::{
    DecisionProvider, GameConfig, LifeAndDeathGame, Outcome, Party, Phase, ScriptedProvider,
};

use crate::console::ConsoleSink;
use crate::providers::{CommandProvider, StdinProvider};

/// Completion service used when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://dashscope.aliyuncs.com";

pub struct PlayOptions {
    pub init: Option<PathBuf>,
    pub seed: Option<u64>,
    pub hp: i32,
    pub ai_command: Option<String>,
    pub ai_moves: Option<String>,
    pub endpoint: String,
    pub think_ms: u64,
    pub journal: Option<PathBuf>,
}

pub async fn run(opts: PlayOptions) -> Result<(), String> {
    let init = super::load_init(opts.init.as_deref(), opts.seed, opts.hp)?;
    let config = GameConfig::default().with_think_time(Duration::from_millis(opts.think_ms));

    let mut game = LifeAndDeathGame::new(config, ConsoleSink::new());
    game.initialize(&init).map_err(|e| e.to_string())?;

    let mut ai: Box<dyn DecisionProvider> = match (opts.ai_command, opts.ai_moves) {
        (Some(command), _) => Box::new(CommandProvider::new(
            command,
            opts.endpoint,
            &game.state().role_app_id,
        )),
        (None, Some(moves)) => Box::new(ScriptedProvider::from_moves(&moves).cycling()),
        (None, None) => return Err("either --ai-command or --ai-moves is required".into()),
    };
    let mut human = StdinProvider::new();

    println!("  {} Life and Death", "Starting".bold());
    println!("  Answer with a, b or c-<n>. End input to leave.\n");

    game.start_round().map_err(|e| e.to_string())?;
    while game.phase() == Phase::AwaitingDecision {
        let leader = game.state().leader;
        let outcome = match leader {
            Party::Ai => game.solicit_decision(ai.as_mut()).await,
            Party::Player => game.solicit_decision(&mut human).await,
        }
        .map_err(|e| e.to_string())?;

        if human.is_closed() {
            println!("  {}", "Input closed, leaving the game.".dimmed());
            break;
        }
        if let (Party::Player, Outcome::Invalid { input }) = (leader, &outcome) {
            println!("  {}", format!("'{input}' is not a valid choice.").yellow());
        }
    }

    if let Some(path) = &opts.journal {
        super::write_journal(path, game.sink().journal())?;
    }
    Ok(())
}
