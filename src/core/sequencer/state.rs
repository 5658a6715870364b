//! Run stages and the report a finished run hands back.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Seed,
    Count1,
    Count2,
    Reveal,
    Advance,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Seed,
        Stage::Count1,
        Stage::Count2,
        Stage::Reveal,
        Stage::Advance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Seed => "seed",
            Stage::Count1 => "count1",
            Stage::Count2 => "count2",
            Stage::Reveal => "reveal",
            Stage::Advance => "advance",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display value observed right after a stage fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub stage: Stage,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step fired; `winner` is the name the advance step drew
    Completed { winner: String },
    /// The handle was cancelled; `after` is the last stage that fired
    Cancelled { after: Stage },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub frames: Vec<Frame>,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Display values in the order they were shown
    pub fn values(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.value.as_str()).collect()
    }

    pub fn winner(&self) -> Option<&str> {
        match &self.outcome {
            RunOutcome::Completed { winner } => Some(winner),
            RunOutcome::Cancelled { .. } => None,
        }
    }
}
