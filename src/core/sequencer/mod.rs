//! Scheduled countdown-and-reveal runs.

pub mod coordinator;
pub mod schedule;
pub mod state;

pub use coordinator::{advance, DrawSequencer, RunCanceller, RunHandle};
pub use schedule::{DrawTiming, RevealMode};
pub use state::{Frame, RunOutcome, RunReport, Stage};
