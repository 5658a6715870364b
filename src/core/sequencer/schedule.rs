//! Step offsets for one run.

use std::time::Duration;

use super::state::Stage;
use crate::core::config::{
    millis, ADVANCE_OFFSET_MS, COUNT1_OFFSET_MS, COUNT2_OFFSET_MS, DEFAULT_REVEAL_PLACEHOLDER,
    MAX_RUN_MS, REVEAL_OFFSET_MS,
};
use crate::core::error::DrawError;

/// Offsets of the non-seed steps, measured from `start()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawTiming {
    pub count1: Duration,
    pub count2: Duration,
    pub reveal: Duration,
    pub advance: Duration,
}

impl Default for DrawTiming {
    fn default() -> Self {
        Self {
            count1: millis(COUNT1_OFFSET_MS),
            count2: millis(COUNT2_OFFSET_MS),
            reveal: millis(REVEAL_OFFSET_MS),
            advance: millis(ADVANCE_OFFSET_MS),
        }
    }
}

impl DrawTiming {
    /// Multiplies every offset by `factor`
    ///
    /// Fails when the factor is not positive or the scaled run would last
    /// longer than `MAX_RUN_MS`.
    pub fn scaled(&self, factor: f64) -> Result<Self, DrawError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(DrawError::InvalidState(format!(
                "timing factor must be positive, got {factor}"
            )));
        }
        let scaled = Self {
            count1: scale_offset(self.count1, factor)?,
            count2: scale_offset(self.count2, factor)?,
            reveal: scale_offset(self.reveal, factor)?,
            advance: scale_offset(self.advance, factor)?,
        };
        if scaled.total() > millis(MAX_RUN_MS) {
            return Err(DrawError::InvalidState(format!(
                "scaled run would last {}s, limit is {}s",
                scaled.total().as_secs(),
                MAX_RUN_MS / 1000
            )));
        }
        Ok(scaled)
    }

    /// The full step table, seed first
    pub fn steps(&self) -> [(Duration, Stage); 5] {
        [
            (Duration::ZERO, Stage::Seed),
            (self.count1, Stage::Count1),
            (self.count2, Stage::Count2),
            (self.reveal, Stage::Reveal),
            (self.advance, Stage::Advance),
        ]
    }

    /// Time from `start()` until the winner is shown
    pub fn total(&self) -> Duration {
        self.advance
    }
}

fn scale_offset(offset: Duration, factor: f64) -> Result<Duration, DrawError> {
    Duration::try_from_secs_f64(offset.as_secs_f64() * factor).map_err(|e| {
        DrawError::InvalidState(format!("timing factor {factor} is out of range: {e}"))
    })
}

/// What the reveal step puts on the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealMode {
    /// A fixed string
    Placeholder(String),
    /// The previous run's winner, or `fallback` on the first run
    PreviousWinner { fallback: String },
}

impl Default for RevealMode {
    fn default() -> Self {
        RevealMode::Placeholder(DEFAULT_REVEAL_PLACEHOLDER.to_string())
    }
}

impl RevealMode {
    pub(crate) fn resolve(&self, previous: Option<&str>) -> String {
        match self {
            RevealMode::Placeholder(text) => text.clone(),
            RevealMode::PreviousWinner { fallback } => {
                previous.unwrap_or(fallback.as_str()).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offsets() {
        let offsets: Vec<u128> = DrawTiming::default()
            .steps()
            .iter()
            .map(|(offset, _)| offset.as_millis())
            .collect();
        assert_eq!(offsets, vec![0, 2000, 4000, 6000, 7000]);
    }

    #[test]
    fn test_scaled_keeps_order() {
        let timing = DrawTiming::default().scaled(0.01).unwrap();
        assert_eq!(timing.count1, Duration::from_millis(20));
        assert_eq!(timing.advance, Duration::from_millis(70));
        let steps = timing.steps();
        assert!(steps.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_total_is_the_advance_offset() {
        assert_eq!(DrawTiming::default().total(), Duration::from_millis(7000));
        let slow = DrawTiming::default().scaled(2.0).unwrap();
        assert_eq!(slow.total(), Duration::from_millis(14_000));
    }

    #[test]
    fn test_scaled_rejects_huge_factor_without_panicking() {
        let timing = DrawTiming::default();
        assert!(matches!(timing.scaled(1e20), Err(DrawError::InvalidState(_))));
        assert!(matches!(timing.scaled(1e300), Err(DrawError::InvalidState(_))));
        assert!(matches!(timing.scaled(1e6), Err(DrawError::InvalidState(_))));
    }

    #[test]
    fn test_scaled_accepts_tiny_factor() {
        let timing = DrawTiming::default().scaled(1e-300).unwrap();
        assert_eq!(timing.total(), Duration::ZERO);
    }

    #[test]
    fn test_scaled_rejects_bad_factor() {
        let timing = DrawTiming::default();
        assert!(timing.scaled(0.0).is_err());
        assert!(timing.scaled(-1.0).is_err());
        assert!(timing.scaled(f64::INFINITY).is_err());
        assert!(timing.scaled(f64::NAN).is_err());
    }

    #[test]
    fn test_reveal_mode_previous_winner_falls_back() {
        let mode = RevealMode::PreviousWinner {
            fallback: "?".to_string(),
        };
        assert_eq!(mode.resolve(None), "?");
        assert_eq!(mode.resolve(Some("Bob")), "Bob");
        assert_eq!(RevealMode::default().resolve(Some("Bob")), "???");
    }
}
