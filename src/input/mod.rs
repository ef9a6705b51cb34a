//! Input decoding for terminal events.
//!
//! Turns raw bytes read from a terminal in raw mode into key presses and
//! pasted text fragments, which is all the editor consumes. Supports legacy
//! VT sequences, CSI sequences with modifiers, UTF-8 text, bracketed paste
//! and focus reports.

mod event;
mod keyboard;
mod parser;

pub use event::{Event, PasteEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{
    DEFAULT_MAX_PASTE_SIZE, InputParser, PASTE_END, PASTE_START, ParseError, ParseResult,
};
