pub mod config;
pub mod sequencer;

// Internal modules - exposed through the curated API below
pub(crate) mod error;
pub(crate) mod pool;
pub(crate) mod random;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
