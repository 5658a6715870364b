//! Random sources and the index draw

use std::collections::VecDeque;
use std::sync::Mutex;

use super::error::DrawError;

/// A source of uniform values in `[0, 1)`
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Thread-local generator from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::random::<f64>()
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0
    }
}

/// Replays a list of values, repeating the last one once exhausted
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            last: Mutex::new(0.0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = self
            .values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            *last = next;
        }
        *last
    }
}

/// Maps a unit value onto an index in `[0, len)`
///
/// Computes `floor(unit * len)`. Values outside `[0, 1)` (and NaN) are clamped
/// so the result is always a valid index.
pub fn pick_index(len: usize, unit: f64) -> Result<usize, DrawError> {
    if len == 0 {
        return Err(DrawError::empty_pool());
    }
    let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
    let index = (unit * len as f64).floor() as usize;
    Ok(index.min(len - 1))
}
