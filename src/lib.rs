//! `line_edit` - a minimal single-line terminal text editor
//!
//! The core is [`LineBuffer`], a growable byte buffer supporting insertion
//! at a column and deletion before a column. Around it sit a cursor, an
//! editing session that maps terminal input to edits, a horizontally
//! scrolling view, and just enough terminal plumbing to run interactively.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow input::InputParser etc
#![allow(clippy::struct_excessive_bools)] // Terminal options need multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod line;
pub mod log;
pub mod session;
pub mod terminal;
pub mod view;

// Re-export core types at crate root
pub use config::EditorOptions;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use line::LineBuffer;
pub use log::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use session::{EditCommand, EditorSession, Flow};
pub use view::{Frame, LineView};

// Re-export input types
pub use input::{Event, InputParser, KeyCode, KeyEvent, KeyModifiers, ParseError, PasteEvent};

// Re-export terminal types
pub use terminal::{
    RawModeGuard, Screen, enable_raw_mode, is_tty, poll_readable, terminal_size,
};
