//! Editing session: one line, one cursor, and the rules tying them together.
//!
//! # Examples
//!
//! ```
//! use line_edit::{EditCommand, EditorSession, Flow};
//!
//! let mut session = EditorSession::new();
//! session.apply(EditCommand::InsertText("helo".into())).unwrap();
//! session.apply(EditCommand::MoveLeft).unwrap();
//! session.apply(EditCommand::InsertText("l".into())).unwrap();
//! assert_eq!(session.line().as_bytes(), b"hello");
//! assert_eq!(session.col(), 4);
//!
//! assert_eq!(session.apply(EditCommand::Quit).unwrap(), Flow::Quit);
//! ```

use crate::cursor::Cursor;
use crate::error::Result;
use crate::input::{Event, KeyCode};
use crate::line::LineBuffer;
use crate::log::{LogLevel, emit_log};

/// An edit requested by the input layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert a typed or pasted text fragment at the cursor.
    InsertText(Vec<u8>),
    /// Delete the byte before the cursor.
    Backspace,
    /// Move the cursor one column left.
    MoveLeft,
    /// Move the cursor one column right.
    MoveRight,
    /// End the session.
    Quit,
}

/// What the host loop should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Stop the editor.
    Quit,
}

/// Editor state: the line being edited and the cursor inside it.
///
/// The session is the only place that mutates both, so after every
/// successful [`apply`](Self::apply) the cursor satisfies
/// `0 <= col <= line.size()`.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    line: LineBuffer,
    cursor: Cursor,
}

impl EditorSession {
    /// Create a session with an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with `text` preloaded and the cursor at its end.
    pub fn with_text(text: impl AsRef<[u8]>) -> Result<Self> {
        let mut session = Self::new();
        session.insert(text.as_ref())?;
        Ok(session)
    }

    /// The line being edited.
    #[must_use]
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// The cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current cursor column.
    #[must_use]
    pub fn col(&self) -> usize {
        self.cursor.col()
    }

    /// Translate a terminal event into an edit command.
    ///
    /// Printable characters and pasted text insert; Backspace (or Ctrl+H)
    /// deletes; Left/Right move; Ctrl+Q, Ctrl+C and Escape quit. Anything
    /// else is ignored.
    #[must_use]
    pub fn command_for(event: &Event) -> Option<EditCommand> {
        match event {
            Event::Paste(paste) => Some(EditCommand::InsertText(paste.content.clone())),
            Event::Key(key) => {
                if let Some(c) = key.typed_char() {
                    return Some(EditCommand::InsertText(c.to_string().into_bytes()));
                }
                if key.is_ctrl_char('q') || key.is_ctrl_char('c') || key.is_esc() {
                    return Some(EditCommand::Quit);
                }
                if key.is_ctrl_char('h') {
                    return Some(EditCommand::Backspace);
                }
                match key.code {
                    KeyCode::Backspace => Some(EditCommand::Backspace),
                    KeyCode::Left => Some(EditCommand::MoveLeft),
                    KeyCode::Right => Some(EditCommand::MoveRight),
                    _ => None,
                }
            }
            Event::FocusGained | Event::FocusLost => None,
        }
    }

    /// Apply the command for `event`, if it maps to one.
    pub fn handle_event(&mut self, event: &Event) -> Result<Flow> {
        match Self::command_for(event) {
            Some(command) => self.apply(command),
            None => Ok(Flow::Continue),
        }
    }

    /// Apply one edit command.
    ///
    /// On error the line and cursor are unchanged and a warning is logged.
    pub fn apply(&mut self, command: EditCommand) -> Result<Flow> {
        match command {
            EditCommand::InsertText(text) => self.insert(&text)?,
            EditCommand::Backspace => self.backspace()?,
            EditCommand::MoveLeft => {
                self.cursor.move_left();
            }
            EditCommand::MoveRight => {
                self.cursor.move_right(self.line.size());
            }
            EditCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self, text: &[u8]) -> Result<()> {
        let col = self.cursor.col();
        if let Err(err) = self.line.insert_text_after(text, col) {
            emit_log(LogLevel::Warn, &format!("insert of {} bytes rejected: {err}", text.len()));
            return Err(err);
        }
        self.cursor.advance(text.len());
        emit_log(
            LogLevel::Debug,
            &format!("inserted {} bytes at {col}, size {}", text.len(), self.line.size()),
        );
        Ok(())
    }

    fn backspace(&mut self) -> Result<()> {
        let col = self.cursor.col();
        match self.line.backspace(col) {
            Ok(removed) => {
                if removed.is_some() {
                    self.cursor.retreat();
                }
                Ok(())
            }
            Err(err) => {
                emit_log(LogLevel::Warn, &format!("backspace rejected: {err}"));
                Err(err)
            }
        }
    }
}
