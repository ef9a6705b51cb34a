//! Growable single-line byte buffer.
//!
//! [`LineBuffer`] stores one line of text as raw bytes. Columns are byte
//! offsets: a multi-byte UTF-8 character occupies several columns, exactly
//! as the bytes arrive from the input layer.
//!
//! # Examples
//!
//! ```
//! use line_edit::LineBuffer;
//!
//! let mut line = LineBuffer::new();
//! line.insert_text_after("helo", 0).unwrap();
//! line.insert_text_after("l", 3).unwrap();
//! assert_eq!(line.as_bytes(), b"hello");
//!
//! line.backspace(5).unwrap();
//! assert_eq!(line.as_bytes(), b"hell");
//! ```

use crate::error::{Error, Result};
use std::borrow::Cow;

/// A single line of text backed by a growable byte vector.
///
/// Storage is allocated lazily on the first non-empty insertion and grows
/// geometrically, so appending one byte at a time costs amortized O(1).
/// Deleting never shrinks the allocation.
///
/// Any slice obtained from [`as_bytes`](Self::as_bytes) borrows the buffer,
/// so it cannot outlive the next mutation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<u8>,
}

impl LineBuffer {
    /// Create an empty line with no storage allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of valid bytes in the line.
    #[must_use]
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Allocated storage in bytes. Always `>= size()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    /// Check if the line has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The line content, `[0, size)`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Byte at `col`, or `None` at or past the end of the line.
    #[must_use]
    pub fn byte_at(&self, col: usize) -> Option<u8> {
        self.chars.get(col).copied()
    }

    /// Line content decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.chars)
    }

    /// Insert `text` so that it starts at offset `col`.
    ///
    /// Bytes before `col` stay in place; bytes from `col` onwards move right
    /// by `text.len()`. Inserting empty text is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumn`] if `col > size()`, and
    /// [`Error::Allocation`] if the storage cannot grow. The line is
    /// unchanged in both cases.
    pub fn insert_text_after(&mut self, text: impl AsRef<[u8]>, col: usize) -> Result<()> {
        let text = text.as_ref();
        self.check_column(col)?;
        if text.is_empty() {
            return Ok(());
        }

        self.reserve_for(text.len())?;
        self.chars.splice(col..col, text.iter().copied());
        Ok(())
    }

    /// Remove the byte immediately before `col`.
    ///
    /// Returns the removed byte, or `None` when `col == 0` (nothing precedes
    /// the start of the line). Capacity is left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumn`] if `col > size()`.
    pub fn backspace(&mut self, col: usize) -> Result<Option<u8>> {
        self.check_column(col)?;
        if col == 0 {
            return Ok(None);
        }
        Ok(Some(self.chars.remove(col - 1)))
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col > self.chars.len() {
            return Err(Error::InvalidColumn {
                col,
                size: self.chars.len(),
            });
        }
        Ok(())
    }

    /// Make room for `additional` more bytes without aborting on failure.
    fn reserve_for(&mut self, additional: usize) -> Result<()> {
        self.chars
            .try_reserve(additional)
            .map_err(|_| Error::Allocation {
                requested: self.chars.len().saturating_add(additional),
            })
    }
}

impl AsRef<[u8]> for LineBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> LineBuffer {
        let mut line = LineBuffer::new();
        line.insert_text_after(text, 0).unwrap();
        line
    }

    #[test]
    fn test_new_allocates_nothing() {
        let line = LineBuffer::new();
        assert_eq!(line.size(), 0);
        assert_eq!(line.capacity(), 0);
        assert!(line.is_empty());
    }

    #[test]
    fn test_insert_into_empty() {
        let line = line("helo");
        assert_eq!(line.as_bytes(), b"helo");
        assert_eq!(line.size(), 4);
        assert!(line.capacity() >= 4);
    }

    #[test]
    fn test_insert_middle() {
        let mut line = line("helo");
        line.insert_text_after("l", 3).unwrap();
        assert_eq!(line.as_bytes(), b"hello");
    }

    #[test]
    fn test_insert_at_start_shifts_everything() {
        let mut line = line("world");
        line.insert_text_after("hello ", 0).unwrap();
        assert_eq!(line.as_bytes(), b"hello world");
    }

    #[test]
    fn test_append_at_size() {
        let mut line = line("abc");
        line.insert_text_after("def", 3).unwrap();
        assert_eq!(line.as_bytes(), b"abcdef");
    }

    #[test]
    fn test_empty_insert_is_noop() {
        let mut line = line("abc");
        let capacity = line.capacity();
        for col in 0..=3 {
            line.insert_text_after("", col).unwrap();
        }
        assert_eq!(line.as_bytes(), b"abc");
        assert_eq!(line.capacity(), capacity);
    }

    #[test]
    fn test_empty_insert_into_empty_allocates_nothing() {
        let mut line = LineBuffer::new();
        line.insert_text_after("", 0).unwrap();
        assert_eq!(line.capacity(), 0);
    }

    #[test]
    fn test_insert_invalid_column_rejected() {
        let mut line = line("abc");
        let err = line.insert_text_after("x", 4).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn { col: 4, size: 3 }));
        assert_eq!(line.as_bytes(), b"abc");

        // Empty text does not bypass validation.
        assert!(line.insert_text_after("", 10).is_err());
    }

    #[test]
    fn test_insert_raw_bytes() {
        let mut line = line("ab");
        line.insert_text_after([0xff, 0x00], 1).unwrap();
        assert_eq!(line.as_bytes(), &[b'a', 0xff, 0x00, b'b']);
    }

    #[test]
    fn test_multibyte_text_counts_bytes() {
        let line = line("é");
        assert_eq!(line.size(), 2);
        assert_eq!(line.to_string_lossy(), "é");
    }

    #[test]
    fn test_backspace_last() {
        let mut line = line("hello");
        assert_eq!(line.backspace(5).unwrap(), Some(b'o'));
        assert_eq!(line.as_bytes(), b"hell");
    }

    #[test]
    fn test_backspace_first() {
        let mut line = line("hello");
        assert_eq!(line.backspace(1).unwrap(), Some(b'h'));
        assert_eq!(line.as_bytes(), b"ello");
    }

    #[test]
    fn test_backspace_middle() {
        let mut line = line("hello");
        assert_eq!(line.backspace(3).unwrap(), Some(b'l'));
        assert_eq!(line.as_bytes(), b"helo");
    }

    #[test]
    fn test_backspace_at_zero_is_noop() {
        let mut line = line("hell");
        assert_eq!(line.backspace(0).unwrap(), None);
        assert_eq!(line.as_bytes(), b"hell");
    }

    #[test]
    fn test_backspace_on_empty_line() {
        let mut line = LineBuffer::new();
        assert_eq!(line.backspace(0).unwrap(), None);
        assert!(line.backspace(1).is_err());
    }

    #[test]
    fn test_backspace_keeps_capacity() {
        let mut line = line("abcdefgh");
        let capacity = line.capacity();
        while line.backspace(line.size()).unwrap().is_some() {}
        assert!(line.is_empty());
        assert_eq!(line.capacity(), capacity);
    }

    #[test]
    fn test_backspace_invalid_column_rejected() {
        let mut line = line("ab");
        let err = line.backspace(3).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn { col: 3, size: 2 }));
        assert_eq!(line.as_bytes(), b"ab");
    }

    #[test]
    fn test_reserve_overflow_reports_allocation_error() {
        let mut line = line("abc");
        let err = line.reserve_for(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::Allocation { requested } if requested == usize::MAX));
        assert_eq!(line.as_bytes(), b"abc");
    }

    #[test]
    fn test_single_byte_appends_reallocate_rarely() {
        let mut line = LineBuffer::new();
        let mut reallocations = 0;
        let mut last_capacity = line.capacity();
        for i in 0..10_000 {
            line.insert_text_after("x", i).unwrap();
            if line.capacity() != last_capacity {
                reallocations += 1;
                last_capacity = line.capacity();
            }
            assert!(line.capacity() >= line.size());
        }
        assert_eq!(line.size(), 10_000);
        assert!(reallocations < 32, "{reallocations} reallocations");
    }

    #[test]
    fn test_byte_at() {
        let line = line("ab");
        assert_eq!(line.byte_at(0), Some(b'a'));
        assert_eq!(line.byte_at(1), Some(b'b'));
        assert_eq!(line.byte_at(2), None);
    }

    #[test]
    fn test_scenario_from_empty() {
        let mut line = LineBuffer::new();
        line.insert_text_after("helo", 0).unwrap();
        assert_eq!((line.as_bytes(), line.size()), (&b"helo"[..], 4));
        line.insert_text_after("l", 3).unwrap();
        assert_eq!((line.as_bytes(), line.size()), (&b"hello"[..], 5));
        line.backspace(5).unwrap();
        assert_eq!((line.as_bytes(), line.size()), (&b"hell"[..], 4));
        line.backspace(0).unwrap();
        assert_eq!((line.as_bytes(), line.size()), (&b"hell"[..], 4));
    }
}
