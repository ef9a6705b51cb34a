//! Terminal setup and teardown.

mod raw;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, poll_readable, terminal_size};

use crate::ansi;
use crate::config::EditorOptions;
use crate::view::Frame;
use std::io::{self, Write};

/// Row the edited line is drawn on.
pub const LINE_ROW: u32 = 0;
/// Row the status line is drawn on.
pub const STATUS_ROW: u32 = 1;

/// Full-screen drawing surface.
///
/// Entering switches to the alternate screen (if enabled), hides the
/// terminal's own cursor, turns on bracketed paste and sets the title.
/// Dropping the screen undoes all of it.
pub struct Screen<W: Write> {
    writer: W,
    alt_screen: bool,
    bracketed_paste: bool,
}

impl<W: Write> Screen<W> {
    /// Prepare the terminal behind `writer` for drawing.
    pub fn enter(mut writer: W, options: &EditorOptions) -> io::Result<Self> {
        if options.use_alt_screen {
            writer.write_all(ansi::ALT_SCREEN_ON.as_bytes())?;
        }
        writer.write_all(ansi::CURSOR_HIDE.as_bytes())?;
        if options.bracketed_paste {
            writer.write_all(ansi::BRACKETED_PASTE_ON.as_bytes())?;
        }
        if let Some(title) = &options.title {
            ansi::write_title(&mut writer, title)?;
        }
        writer.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        writer.flush()?;

        Ok(Self {
            writer,
            alt_screen: options.use_alt_screen,
            bracketed_paste: options.bracketed_paste,
        })
    }

    /// Draw the line and an optional status text, as one synchronized update.
    pub fn draw(&mut self, frame: &Frame, status: Option<&str>) -> io::Result<()> {
        self.writer.write_all(ansi::sync::BEGIN.as_bytes())?;
        frame.write_to(&mut self.writer, LINE_ROW)?;
        if let Some(status) = status {
            ansi::write_cursor_position(&mut self.writer, STATUS_ROW, 0)?;
            self.writer.write_all(ansi::CLEAR_LINE.as_bytes())?;
            self.writer.write_all(status.as_bytes())?;
        }
        self.writer.write_all(ansi::sync::END.as_bytes())?;
        self.writer.flush()
    }

    /// Direct access to the underlying writer.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.bracketed_paste {
            self.writer.write_all(ansi::BRACKETED_PASTE_OFF.as_bytes())?;
        }
        self.writer.write_all(ansi::RESET.as_bytes())?;
        self.writer.write_all(ansi::CURSOR_SHOW.as_bytes())?;
        if self.alt_screen {
            self.writer.write_all(ansi::ALT_SCREEN_OFF.as_bytes())?;
        }
        self.writer.flush()
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
