//! # lucky-draw
//!
//! `lucky-draw` runs a countdown-and-reveal raffle: it counts `1`, `2`, `3`,
//! shows a reveal placeholder, then logs the previous display value to a
//! history board and shows a name drawn at random from the candidate pool.
//! It powers the `luckydraw` CLI tool.
//!
//! ## Core Features
//!
//! - **Scheduled Runs**: A fixed step table executed on a tokio task, with a
//!   cancellation handle and a guard against overlapping runs.
//! - **Pluggable Display**: Any [`DisplaySurface`](crate::display::DisplaySurface) can host the draw;
//!   an in-memory surface and an indicatif terminal surface are included.
//! - **Deterministic Testing**: Swap in a [`FixedRandom`](crate::core::FixedRandom) or
//!   [`ScriptedRandom`](crate::core::ScriptedRandom) source and a paused tokio clock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lucky_draw::core::{CandidatePool, DrawSequencer};
//! use lucky_draw::display::MemoryDisplay;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let display = Arc::new(MemoryDisplay::new());
//!     let sequencer = DrawSequencer::new(CandidatePool::new(["Alice", "Bob"]), display);
//!     let report = sequencer.run().await.unwrap();
//!     println!("winner: {:?}", report.winner());
//! }
//! ```

pub mod commands;
pub mod core;
pub mod display;
pub mod utils;
