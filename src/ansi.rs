//! ANSI escape sequence generation.

use std::io::{self, Write};

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Reverse video (swap foreground and background).
pub const INVERSE: &str = "\x1b[7m";

/// Clear entire line.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Enable alternative screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Disable alternative screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Enable bracketed paste mode.
pub const BRACKETED_PASTE_ON: &str = "\x1b[?2004h";

/// Disable bracketed paste mode.
pub const BRACKETED_PASTE_OFF: &str = "\x1b[?2004l";

/// Set window title prefix.
pub const TITLE_PREFIX: &str = "\x1b]0;";

/// Set window title suffix.
pub const TITLE_SUFFIX: &str = "\x1b\\";

/// Synchronous update sequences (for flicker-free rendering).
pub mod sync {
    /// Begin synchronized update.
    pub const BEGIN: &str = "\x1b[?2026h";
    /// End synchronized update.
    pub const END: &str = "\x1b[?2026l";
}

/// Write cursor position sequence (0-indexed in, 1-indexed on the wire).
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row + 1, col + 1)
}

/// Write a window title sequence. Control characters are dropped so the
/// title cannot terminate the sequence early.
pub fn write_title(w: &mut impl Write, title: &str) -> io::Result<()> {
    w.write_all(TITLE_PREFIX.as_bytes())?;
    for c in title.chars().filter(|c| !c.is_control()) {
        write!(w, "{c}")?;
    }
    w.write_all(TITLE_SUFFIX.as_bytes())
}
