//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use self::fixtures::{names_dir, write_names_file};

use lucky_draw::core::{CandidatePool, DrawSequencer, FixedRandom, RandomSource};
use lucky_draw::display::MemoryDisplay;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static TEST_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquires a global lock for tests that modify process-wide state (like env vars)
pub fn lock_test() -> MutexGuard<'static, ()> {
    TEST_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Builds a sequencer over an in-memory display, returning both
pub fn sequencer_with(
    names: &[&str],
    random: Arc<dyn RandomSource>,
) -> (DrawSequencer, Arc<MemoryDisplay>) {
    let display = Arc::new(MemoryDisplay::new());
    let sequencer = DrawSequencer::new(CandidatePool::new(names.iter().copied()), display.clone())
        .with_random(random);
    (sequencer, display)
}

/// Sequencer whose draws always land on `unit`
pub fn fixed_sequencer(names: &[&str], unit: f64) -> (DrawSequencer, Arc<MemoryDisplay>) {
    sequencer_with(names, Arc::new(FixedRandom(unit)))
}
