use std::io::{self, BufRead, Write};

use clap::Parser;
use monopolio_rs::cli::{CommandProcessor, print_command_help};
use monopolio_rs::game::GameConfig;
use monopolio_rs::game::players::STARTING_FUNDS;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "monopolio-play")]
#[command(about = "Play the 7x7 toroidal property game from the terminal")]
struct Args {
    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Funds every player starts a game with
    #[arg(long, default_value_t = STARTING_FUNDS)]
    starting_funds: i64,

    /// Print board details (DJ) as JSON
    #[arg(long)]
    json: bool,

    /// Show the command list and exit
    #[arg(long)]
    help_commands: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.help_commands {
        print_command_help();
        return Ok(());
    }

    let config = GameConfig {
        seed: args.seed.unwrap_or_else(rand::random),
        starting_funds: args.starting_funds,
        ..GameConfig::default()
    };
    tracing::info!(seed = config.seed, "monopolio starting");

    let mut processor = CommandProcessor::new(config).with_json(args.json);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        for output in processor.execute(&line) {
            writeln!(stdout, "{output}")?;
        }
    }
    Ok(())
}
