//! Lucky draw command implementation
//!
//! Resolves the candidate pool, then runs one or more countdown-and-reveal
//! draws against a terminal spinner and prints the winners.

use anyhow::{bail, Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{
    default_names_path, names_path_from_env, resolve_pool, set_terminal_title,
    set_terminal_title_and_flush, DrawSequencer, DrawTiming, LoadedPool, RevealMode, RunOutcome,
    DEFAULT_REVEAL_PLACEHOLDER, NO_NAMES_MESSAGE,
};
use crate::core::config::{TITLE_DONE, TITLE_RUNNING};
use crate::display::{render_history, DisplaySurface, TerminalDisplay};

/// Options for the draw command, as parsed from the command line
#[derive(Debug, Clone)]
pub struct DrawOptions {
    pub names: Vec<String>,
    pub file: Option<PathBuf>,
    pub rounds: u32,
    pub speed: f64,
    pub placeholder: Option<String>,
    pub reveal_previous: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            file: None,
            rounds: 1,
            speed: 1.0,
            placeholder: None,
            reveal_previous: false,
        }
    }
}

impl DrawOptions {
    /// Step offsets for the requested speed; 2.0 runs twice as fast
    pub fn timing(&self) -> Result<DrawTiming> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            bail!("--speed must be a positive number, got {}", self.speed);
        }
        Ok(DrawTiming::default().scaled(1.0 / self.speed)?)
    }

    /// Command line placeholder wins over the names file, which wins over the default
    pub fn reveal_mode(&self, loaded: &LoadedPool) -> RevealMode {
        let text = self
            .placeholder
            .clone()
            .or_else(|| loaded.placeholder.clone())
            .unwrap_or_else(|| DEFAULT_REVEAL_PLACEHOLDER.to_string());
        if self.reveal_previous {
            RevealMode::PreviousWinner { fallback: text }
        } else {
            RevealMode::Placeholder(text)
        }
    }
}

/// Resolves the pool for `options`, failing when there is nothing to draw from
pub fn load_pool(options: &DrawOptions) -> Result<LoadedPool> {
    let loaded = resolve_pool(
        &options.names,
        options.file.as_deref(),
        names_path_from_env(),
        default_names_path(),
    )?;

    let Some(loaded) = loaded else {
        bail!("{NO_NAMES_MESSAGE} Pass names as arguments or use --file.");
    };
    if loaded.pool.is_empty() {
        bail!("{NO_NAMES_MESSAGE} The {:?} source is empty.", loaded.source);
    }
    debug!(source = ?loaded.source, candidates = loaded.pool.len(), "candidate pool loaded");
    Ok(loaded)
}

/// Handles the draw command
pub async fn handle_draw_command(options: DrawOptions) -> Result<()> {
    set_terminal_title(TITLE_RUNNING);

    let result = run_draws(&options).await;

    set_terminal_title_and_flush(TITLE_DONE);
    result
}

/// Spinner display when stdout is a terminal, a hidden one otherwise
pub fn create_display(interactive: bool) -> Result<TerminalDisplay> {
    if interactive {
        TerminalDisplay::new()
    } else {
        Ok(TerminalDisplay::hidden())
    }
}

async fn run_draws(options: &DrawOptions) -> Result<()> {
    if options.rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    let loaded = load_pool(options)?;
    let timing = options.timing()?;
    let reveal = options.reveal_mode(&loaded);
    let total_candidates = loaded.pool.len();

    let candidate_word = if total_candidates == 1 {
        "candidate"
    } else {
        "candidates"
    };
    println!(
        "🎲 Drawing from {} {} • {:.1}s per round\n",
        total_candidates,
        candidate_word,
        timing.total().as_secs_f64()
    );

    let display = Arc::new(create_display(std::io::stdout().is_terminal())?);
    let sequencer = DrawSequencer::new(loaded.pool, display.clone())
        .with_timing(timing)
        .with_reveal(reveal);

    let mut winners = Vec::new();
    for round in 1..=options.rounds {
        let handle = sequencer.start()?;

        let canceller = handle.canceller();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                canceller.cancel();
            }
        });
        let report = handle.wait().await;
        ctrl_c.abort();

        let report = report.with_context(|| format!("Draw round {round} failed"))?;
        match report.outcome {
            RunOutcome::Completed { winner } => {
                info!(round, %winner, "round complete");
                display.println(&format!("🎉 Round {round}: {winner}"));
                winners.push(winner);
            }
            RunOutcome::Cancelled { after } => {
                info!(round, %after, "round cancelled");
                display.println(&format!("⏹️  Round {round} cancelled after {after}"));
                break;
            }
        }
    }
    display.finish();

    let history = render_history(&display.history_markup());
    println!("\n{}", generate_summary(&winners, &history));
    Ok(())
}

/// Formats the winners (newest first) and the board history as a tree
pub fn generate_summary(winners: &[String], history: &[String]) -> String {
    let mut lines = Vec::new();

    if winners.is_empty() {
        lines.push("No winners drawn".to_string());
    } else {
        lines.push(format!("🏆 WINNERS ({})", winners.len()));
        push_tree(&mut lines, winners.iter().rev());
    }

    if !history.is_empty() {
        lines.push(String::new());
        lines.push(format!("📜 BOARD HISTORY ({})", history.len()));
        push_tree(&mut lines, history.iter());
    }

    lines.join("\n")
}

fn push_tree<'a>(lines: &mut Vec<String>, entries: impl ExactSizeIterator<Item = &'a String>) {
    let count = entries.len();
    for (i, entry) in entries.enumerate() {
        let tree_char = if i == count - 1 { "└─" } else { "├─" };
        lines.push(format!("   {} {}", tree_char, entry));
    }
}
