//! Terminal frontend for Life and Death.

mod commands;
mod console;
mod providers;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LAD_LOG";

#[derive(Parser)]
#[command(
    name = "lad",
    about = "Life and Death: send your opponent through the worlds before they send you",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a new setup and print it as JSON
    Roll {
        /// RNG seed for a reproducible setup
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting health for both parties
        #[arg(long, default_value = "3")]
        hp: i32,
    },

    /// Play against the AI, reading your moves from stdin
    Play {
        /// Setup JSON file (default: roll a new one)
        #[arg(short, long)]
        init: Option<PathBuf>,

        /// RNG seed for the rolled setup
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting health when rolling a setup
        #[arg(long, default_value = "3")]
        hp: i32,

        /// Shell command that answers completion requests for the AI
        #[arg(long, required_unless_present = "ai_moves")]
        ai_command: Option<String>,

        /// Comma-separated moves the AI repeats instead (e.g. "c-1,b,a")
        #[arg(long, conflicts_with = "ai_command")]
        ai_moves: Option<String>,

        /// Completion service base URL, passed to the AI command
        #[arg(long, default_value = commands::play::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Pause before each decision, in milliseconds
        #[arg(long, default_value = "5000")]
        think_ms: u64,

        /// Write the game journal to this file as JSON
        #[arg(short, long)]
        journal: Option<PathBuf>,
    },

    /// Play a game between two scripted sides
    Simulate {
        /// Setup JSON file (default: roll a new one)
        #[arg(short, long)]
        init: Option<PathBuf>,

        /// RNG seed for the rolled setup
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting health when rolling a setup
        #[arg(long, default_value = "3")]
        hp: i32,

        /// Comma-separated moves the human side repeats
        #[arg(long, default_value = "a")]
        player_moves: String,

        /// Comma-separated moves the AI side repeats
        #[arg(long, default_value = "b")]
        ai_moves: String,

        /// Stop after this many rounds if nobody has fallen
        #[arg(long, default_value = "100")]
        max_rounds: u32,

        /// Fixed clock reading for refill seeds (default: wall clock)
        #[arg(long)]
        clock_ms: Option<i64>,

        /// Write the game journal to this file as JSON
        #[arg(short, long)]
        journal: Option<PathBuf>,

        /// Output format: markdown, text
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { seed, hp } => commands::roll::run(seed, hp),
        Commands::Play {
            init,
            seed,
            hp,
            ai_command,
            ai_moves,
            endpoint,
            think_ms,
            journal,
        } => {
            let opts = commands::play::PlayOptions {
                init,
                seed,
                hp,
                ai_command,
                ai_moves,
                endpoint,
                think_ms,
                journal,
            };
            commands::play::run(opts).await
        }
        Commands::Simulate {
            init,
            seed,
            hp,
            player_moves,
            ai_moves,
            max_rounds,
            clock_ms,
            journal,
            format,
        } => {
            let opts = commands::simulate::SimulateOptions {
                init,
                seed,
                hp,
                player_moves,
                ai_moves,
                max_rounds,
                clock_ms,
                journal,
                format,
            };
            commands::simulate::run(opts).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
