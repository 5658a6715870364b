//! luckydraw: counts down, reveals, and draws a random name from a list.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lucky_draw::commands::{handle_draw_command, DrawOptions};

#[derive(Parser)]
#[command(name = "luckydraw")]
#[command(about = "Countdown-and-reveal lucky draw for the terminal")]
#[command(version)]
struct Cli {
    /// Candidate names; overrides --file and the config directory
    names: Vec<String>,

    /// Names file: .toml with `names = [...]`, or one name per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of draws to run back to back
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Animation speed multiplier (2.0 runs twice as fast)
    #[arg(short, long, default_value_t = 1.0)]
    speed: f64,

    /// Text shown by the reveal step
    #[arg(long, value_name = "TEXT")]
    placeholder: Option<String>,

    /// Reveal the previous winner instead of the placeholder
    #[arg(long)]
    reveal_previous: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    handle_draw_command(DrawOptions {
        names: cli.names,
        file: cli.file,
        rounds: cli.rounds,
        speed: cli.speed,
        placeholder: cli.placeholder,
        reveal_previous: cli.reveal_previous,
    })
    .await
}
