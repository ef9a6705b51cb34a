//! Visual layout of the line for a fixed-width display.
//!
//! Every byte occupies exactly one cell. Printable ASCII is drawn as
//! itself; anything else (control bytes, pieces of multi-byte UTF-8
//! characters) is drawn as [`REPLACEMENT_GLYPH`], the same way a bitmap
//! font covering only `' '..='~'` would show it.

use crate::ansi;
use crate::cursor::Cursor;
use crate::line::LineBuffer;
use std::io::{self, Write};

/// Lowest byte with its own glyph.
pub const DISPLAY_LOW: u8 = b' ';
/// Highest byte with its own glyph.
pub const DISPLAY_HIGH: u8 = b'~';
/// Glyph drawn for bytes outside `DISPLAY_LOW..=DISPLAY_HIGH`.
pub const REPLACEMENT_GLYPH: char = '?';

/// Glyph used to draw `byte`.
#[must_use]
pub fn display_glyph(byte: u8) -> char {
    if (DISPLAY_LOW..=DISPLAY_HIGH).contains(&byte) {
        byte as char
    } else {
        REPLACEMENT_GLYPH
    }
}

/// One laid-out line, ready to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Visible glyphs, at most `width` of them.
    pub glyphs: String,
    /// Cursor cell, relative to the left edge of the view.
    pub cursor_x: usize,
    /// Glyph under the cursor, `None` when the cursor is past the last byte.
    pub cursor_glyph: Option<char>,
}

impl Frame {
    /// Draw the frame on `row`: the visible text with the cursor cell in
    /// reverse video.
    pub fn write_to(&self, w: &mut impl Write, row: u32) -> io::Result<()> {
        ansi::write_cursor_position(w, row, 0)?;
        w.write_all(ansi::CLEAR_LINE.as_bytes())?;

        // Glyphs are ASCII, so char index == byte index.
        let split = self.cursor_x.min(self.glyphs.len());
        let (before, rest) = self.glyphs.split_at(split);
        let after = rest.get(1..).unwrap_or("");

        w.write_all(before.as_bytes())?;
        w.write_all(ansi::INVERSE.as_bytes())?;
        write!(w, "{}", self.cursor_glyph.unwrap_or(' '))?;
        w.write_all(ansi::RESET.as_bytes())?;
        w.write_all(after.as_bytes())
    }
}

/// Horizontal viewport over a line.
///
/// Keeps a scroll offset so that the cursor cell is always visible, moving
/// it only when the cursor would leave the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineView {
    width: usize,
    scroll: usize,
}

impl LineView {
    /// Create a view `width` cells wide. Zero is clamped to one cell.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            scroll: 0,
        }
    }

    /// View width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of the first visible byte.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Change the width, e.g. after a terminal resize.
    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
    }

    /// Lay out `line` with `cursor`, scrolling if needed.
    pub fn layout(&mut self, line: &LineBuffer, cursor: Cursor) -> Frame {
        let col = cursor.col().min(line.size());
        self.follow(col);

        let bytes = line.as_bytes();
        let start = self.scroll.min(bytes.len());
        let end = (self.scroll + self.width).min(bytes.len());
        let glyphs = bytes[start..end].iter().copied().map(display_glyph).collect();

        Frame {
            glyphs,
            cursor_x: col - self.scroll,
            cursor_glyph: line.byte_at(col).map(display_glyph),
        }
    }

    fn follow(&mut self, col: usize) {
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + self.width {
            self.scroll = col + 1 - self.width;
        }
    }
}
