//! Display surfaces the draw sequencer writes to
//!
//! A surface holds two cells: the current display value (countdown digit,
//! reveal placeholder or winner) and the history markup, newest entry first.

mod memory;
mod terminal;

pub use memory::MemoryDisplay;
pub use terminal::{render_history, TerminalDisplay};

/// Host-supplied display the sequencer reads from and writes to
///
/// Methods take `&self`; implementations use interior mutability so one
/// surface can be shared between the run task and its observers.
pub trait DisplaySurface: Send + Sync {
    fn display_value(&self) -> String;
    fn set_display_value(&self, value: &str);
    fn history_markup(&self) -> String;
    fn set_history_markup(&self, markup: &str);
}
