use std::sync::Mutex;

use super::DisplaySurface;

#[derive(Debug, Default)]
struct MemoryState {
    value: String,
    history: String,
    writes: Vec<String>,
}

/// In-memory display that also records every value written to it
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    state: Mutex<MemoryState>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with existing history markup, e.g. from an earlier session
    pub fn with_history(history: &str) -> Self {
        let display = Self::new();
        display.set_history_markup(history);
        display
    }

    /// Every display value written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySurface for MemoryDisplay {
    fn display_value(&self) -> String {
        self.lock().value.clone()
    }

    fn set_display_value(&self, value: &str) {
        let mut state = self.lock();
        state.value = value.to_string();
        state.writes.push(value.to_string());
    }

    fn history_markup(&self) -> String {
        self.lock().history.clone()
    }

    fn set_history_markup(&self, markup: &str) {
        self.lock().history = markup.to_string();
    }
}
