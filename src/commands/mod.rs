//! Command handlers invoked by the `luckydraw` binary

pub mod draw;

pub use draw::{handle_draw_command, DrawOptions};
