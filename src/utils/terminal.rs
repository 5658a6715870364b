//! Terminal title handling while a draw is on screen

use std::io::Write;

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    // ANSI escape sequence to set terminal title
    print!("\x1b]0;{}\x07", title);
}

/// Sets the terminal title and flushes stdout
pub fn set_terminal_title_and_flush(title: &str) {
    set_terminal_title(title);
    // A title is cosmetic; a closed stdout must not fail the command
    let _ = std::io::stdout().flush();
}
