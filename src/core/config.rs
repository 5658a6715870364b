//! Configuration constants and settings

use std::time::Duration;

// Countdown Configuration
//
// The countdown shows SEED, SEED+1, SEED+2 before the reveal. Offsets are
// measured from the moment a run is started, not from the previous step.

pub const COUNTDOWN_SEED: u32 = 1;
pub const COUNT1_OFFSET_MS: u64 = 2000;
pub const COUNT2_OFFSET_MS: u64 = 4000;
pub const REVEAL_OFFSET_MS: u64 = 6000;
pub const ADVANCE_OFFSET_MS: u64 = 7000;

/// Longest run a scaled timing may produce (24 hours)
pub const MAX_RUN_MS: u64 = 24 * 60 * 60 * 1000;

/// Shown by the reveal step before the winner is drawn
pub const DEFAULT_REVEAL_PLACEHOLDER: &str = "???";

/// Appended after each entry prepended to the history markup
pub const HISTORY_SEPARATOR: &str = "<br />";

// Names file resolution
pub const NAMES_FILE_ENV: &str = "LUCKYDRAW_NAMES";
pub const CONFIG_DIR_NAME: &str = "luckydraw";
pub const CONFIG_FILE_NAME: &str = "names.toml";
pub const COMMENT_PREFIX: char = '#';

// UI Constants
pub const SPINNER_TEMPLATE: &str = "{spinner:.bold} {wide_msg}";
pub const SPINNER_TICK_CHARS: &str = "🎲🎰🎲🎰 ";
pub const SPINNER_TICK_MS: u64 = 120;
pub const NO_NAMES_MESSAGE: &str = "No candidate names found.";
pub const TITLE_RUNNING: &str = "🎲 luckydraw";
pub const TITLE_DONE: &str = "✅ luckydraw";

/// Converts a millisecond constant into a Duration
pub const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
