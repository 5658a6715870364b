//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - The draw sequencer and its run handle
//! - Candidate pools and names file loading
//! - Random sources
//! - Error types

// Sequencer
pub use super::sequencer::{
    advance, DrawSequencer, DrawTiming, Frame, RevealMode, RunCanceller, RunHandle, RunOutcome,
    RunReport, Stage,
};

// Candidate pool
pub use super::pool::{
    default_names_path, load_names_file, names_path_from_env, parse_names, resolve_pool,
    CandidatePool, LoadedPool, PoolSource,
};

// Randomness
pub use super::random::{pick_index, FixedRandom, RandomSource, ScriptedRandom, ThreadRandom};

// Errors
pub use super::error::DrawError;

// User-facing messages
pub use super::config::{DEFAULT_REVEAL_PLACEHOLDER, HISTORY_SEPARATOR, NO_NAMES_MESSAGE};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
