//! Terminal display backed by an indicatif spinner line

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

use super::DisplaySurface;
use crate::core::config::{HISTORY_SEPARATOR, SPINNER_TEMPLATE, SPINNER_TICK_CHARS, SPINNER_TICK_MS};

/// Shows the current display value on a single spinner line
pub struct TerminalDisplay {
    bar: ProgressBar,
    value: Mutex<String>,
    history: Mutex<String>,
}

impl TerminalDisplay {
    pub fn new() -> Result<Self> {
        let bar = ProgressBar::new_spinner();
        bar.set_style(create_spinner_style()?);
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Ok(Self::with_bar(bar))
    }

    /// Draws nothing; the draw command picks this when stdout is not a terminal
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            value: Mutex::new(String::new()),
            history: Mutex::new(String::new()),
        }
    }

    /// Stops the spinner, leaving the last value on screen
    pub fn finish(&self) {
        let value = self.display_value();
        self.bar.finish_with_message(format!("🏆 {value}"));
    }

    /// Prints a line above the spinner without tearing it
    pub fn println(&self, line: &str) {
        self.bar.println(line);
    }
}

impl DisplaySurface for TerminalDisplay {
    fn display_value(&self) -> String {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_display_value(&self, value: &str) {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = value.to_string();
        self.bar.set_message(value.to_string());
    }

    fn history_markup(&self) -> String {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_history_markup(&self, markup: &str) {
        *self.history.lock().unwrap_or_else(|e| e.into_inner()) = markup.to_string();
    }
}

fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)?
        .tick_chars(SPINNER_TICK_CHARS))
}

/// Splits history markup into plain lines, newest first
pub fn render_history(markup: &str) -> Vec<String> {
    markup
        .split(HISTORY_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
