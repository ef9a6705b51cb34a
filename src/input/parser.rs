//! ANSI sequence parser for terminal input.
//!
//! Parses raw bytes from the terminal into structured events. Supports:
//! - Printable ASCII and UTF-8 text
//! - Control bytes (Ctrl+A .. Ctrl+Z, Backspace, Null)
//! - CSI sequences with modifiers (arrows, Home/End, tilde keys)
//! - SS3 sequences (F1-F4, application-mode arrows)
//! - Bracketed paste mode
//! - Focus events

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::event::{Event, PasteEvent};
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete sequence (need more bytes). Nothing was consumed; call
    /// again with the same bytes once more input has arrived.
    Incomplete,
    /// Unrecognized escape sequence. Skip `.0.len()` bytes to resynchronize.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input. Skip one byte to resynchronize.
    InvalidUtf8,
    /// Bracketed paste grew past the parser's size limit without an end
    /// marker. The pending input should be discarded.
    PasteBufferOverflow,
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Default limit on bracketed paste content (10 MiB).
pub const DEFAULT_MAX_PASTE_SIZE: usize = 10 * 1024 * 1024;

/// Marker a terminal sends before bracketed paste content.
pub const PASTE_START: &[u8] = b"\x1b[200~";
/// Marker a terminal sends after bracketed paste content.
pub const PASTE_END: &[u8] = b"\x1b[201~";

/// Stateless decoder from terminal bytes to [`Event`]s.
///
/// The parser never buffers input itself: when a sequence is split across
/// reads it reports [`ParseError::Incomplete`] and the caller keeps the
/// unconsumed bytes for the next call. A caller holding an unfinished
/// paste passes how much of it was already searched to
/// [`parse_resuming`](Self::parse_resuming), so a long paste arriving in
/// many reads is scanned once overall.
#[derive(Clone, Debug)]
pub struct InputParser {
    max_paste_size: usize,
}

impl Default for InputParser {
    fn default() -> Self {
        Self {
            max_paste_size: DEFAULT_MAX_PASTE_SIZE,
        }
    }
}

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom bracketed paste size limit.
    #[must_use]
    pub fn with_max_paste_size(max_paste_size: usize) -> Self {
        Self { max_paste_size }
    }

    /// Largest bracketed paste this parser accepts, in bytes.
    #[must_use]
    pub fn max_paste_size(&self) -> usize {
        self.max_paste_size
    }

    /// Parse one event from the front of `input`.
    ///
    /// Returns the event and number of bytes consumed, or an error.
    /// Call repeatedly, advancing past consumed bytes, until
    /// `Err(ParseError::Empty)` or `Err(ParseError::Incomplete)`.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        self.parse_resuming(input, 0)
    }

    /// Like [`parse`](Self::parse), for `input` whose first `scanned` bytes
    /// were already given to a call that returned `Incomplete`.
    ///
    /// When `input` is an unfinished bracketed paste, the search for the end
    /// marker picks up where that call left off instead of starting over.
    /// `scanned` is ignored for any other input.
    pub fn parse_resuming(&self, input: &[u8], scanned: usize) -> ParseResult {
        if input.starts_with(PASTE_START) {
            return self.parse_paste(input, scanned);
        }
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            0x00 => Ok((KeyEvent::key(KeyCode::Null).into(), 1)),
            0x01..=0x1a => {
                // Ctrl+A through Ctrl+Z
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)).into(), 1))
            }
            0x7f => Ok((KeyEvent::key(KeyCode::Backspace).into(), 1)),
            0x20..=0x7e => Ok((KeyEvent::char(first as char).into(), 1)),
            0x80..=0xff => self.parse_utf8(input),
            _ => Ok((KeyEvent::char(first as char).into(), 1)),
        }
    }

    /// Resolve input that stopped arriving mid-sequence.
    ///
    /// A lone `ESC` is indistinguishable from the start of a sequence until
    /// the terminal goes quiet. Once it has, the caller can use this to turn
    /// a leading `ESC` into an Escape key press.
    #[must_use]
    pub fn flush_escape(&self, input: &[u8]) -> Option<(Event, usize)> {
        (input == [0x1b]).then(|| (KeyEvent::key(KeyCode::Esc).into(), 1))
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be just Escape or start of sequence
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            b'[' => self.parse_csi(input),
            b'O' => self.parse_ss3(input),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::with_alt(KeyCode::Char(c)).into(), 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // Final byte is in 0x40-0x7e
        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let params = &input[2..end];
        let consumed = end + 1;

        match input[end] {
            b'A' => self.parse_modified_key(params, KeyCode::Up, consumed),
            b'B' => self.parse_modified_key(params, KeyCode::Down, consumed),
            b'C' => self.parse_modified_key(params, KeyCode::Right, consumed),
            b'D' => self.parse_modified_key(params, KeyCode::Left, consumed),
            b'H' => self.parse_modified_key(params, KeyCode::Home, consumed),
            b'F' => self.parse_modified_key(params, KeyCode::End, consumed),
            b'Z' if params.is_empty() => Ok((KeyEvent::key(KeyCode::BackTab).into(), consumed)),
            b'~' => self.parse_tilde_key(params, &input[..consumed]),
            b'I' if params.is_empty() => Ok((Event::FocusGained, consumed)),
            b'O' if params.is_empty() => Ok((Event::FocusLost, consumed)),
            _ => Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        }
    }

    /// Parse a key with modifiers from CSI params.
    fn parse_modified_key(&self, params: &[u8], base_key: KeyCode, consumed: usize) -> ParseResult {
        let modifiers = self.parse_modifiers(params)?;
        Ok((KeyEvent::new(base_key, modifiers).into(), consumed))
    }

    /// Parse modifiers from CSI parameter bytes.
    ///
    /// Format: `1;N` where `N = 1 + (shift ? 1 : 0) + (alt ? 2 : 0) + (ctrl ? 4 : 0)`.
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let mut mods = KeyModifiers::empty();
        if let Some(n) = s.split(';').nth(1).and_then(|p| p.parse::<u8>().ok()) {
            let n = n.saturating_sub(1);
            if n & 1 != 0 {
                mods |= KeyModifiers::SHIFT;
            }
            if n & 2 != 0 {
                mods |= KeyModifiers::ALT;
            }
            if n & 4 != 0 {
                mods |= KeyModifiers::CTRL;
            }
        }
        Ok(mods)
    }

    /// Parse tilde key sequences (Insert, Delete, Page Up/Down, F5+).
    fn parse_tilde_key(&self, params: &[u8], sequence: &[u8]) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let num: u8 = s.split(';').next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let modifiers = self.parse_modifiers(params)?;

        let code = match num {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            15 => KeyCode::F(5),
            17 => KeyCode::F(6),
            18 => KeyCode::F(7),
            19 => KeyCode::F(8),
            20 => KeyCode::F(9),
            21 => KeyCode::F(10),
            23 => KeyCode::F(11),
            24 => KeyCode::F(12),
            _ => return Err(ParseError::UnrecognizedSequence(sequence.to_vec())),
        };

        Ok((KeyEvent::new(code, modifiers).into(), sequence.len()))
    }

    /// Parse SS3 sequences (ESC O ...).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'P' => KeyCode::F(1),
            b'Q' => KeyCode::F(2),
            b'R' => KeyCode::F(3),
            b'S' => KeyCode::F(4),
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code).into(), 3))
    }

    /// Skip the rest of a paste: returns the number of bytes up to and
    /// including the first end marker in `input`, or `None` if it has not
    /// arrived yet.
    #[must_use]
    pub fn find_paste_end(&self, input: &[u8]) -> Option<usize> {
        find_subsequence(input, PASTE_END).map(|pos| pos + PASTE_END.len())
    }

    /// Parse bracketed paste (`ESC[200~ ... ESC[201~`).
    ///
    /// The whole paste must be present in `input`; until the end marker
    /// arrives this reports `Incomplete` without consuming anything. The
    /// content is passed through byte for byte.
    fn parse_paste(&self, input: &[u8], scanned: usize) -> ParseResult {
        let body = &input[PASTE_START.len()..];
        // An end marker missed last time can only straddle the old end.
        let from = scanned
            .saturating_sub(PASTE_START.len() + PASTE_END.len() - 1)
            .min(body.len());

        match find_subsequence(&body[from..], PASTE_END).map(|pos| from + pos) {
            Some(pos) if pos > self.max_paste_size => Err(ParseError::PasteBufferOverflow),
            Some(pos) => Ok((
                PasteEvent::new(&body[..pos]).into(),
                PASTE_START.len() + pos + PASTE_END.len(),
            )),
            None if body.len() > self.max_paste_size + PASTE_END.len() => {
                Err(ParseError::PasteBufferOverflow)
            }
            None => Err(ParseError::Incomplete),
        }
    }

    /// Parse a UTF-8 character sequence.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c).into(), expected_len))
    }
}

/// Find a subsequence in a slice.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
