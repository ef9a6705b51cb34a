//! Caller-owned cursor column.

/// Cursor position in a [`LineBuffer`](crate::LineBuffer).
///
/// The cursor is a plain byte column, kept separate from the buffer: the
/// buffer's mutators take a column argument and never touch the cursor, and
/// whoever owns both (normally [`EditorSession`](crate::EditorSession))
/// moves the cursor after each edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    col: usize,
}

impl Cursor {
    /// Create a cursor at the start of the line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at `col`.
    #[must_use]
    pub fn at(col: usize) -> Self {
        Self { col }
    }

    /// Current column.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Move right past `n` freshly inserted bytes.
    pub fn advance(&mut self, n: usize) {
        self.col = self.col.saturating_add(n);
    }

    /// Step back one column. Returns `false` if already at column 0.
    pub fn retreat(&mut self) -> bool {
        if self.col == 0 {
            return false;
        }
        self.col -= 1;
        true
    }

    /// Move one column left, stopping at 0.
    pub fn move_left(&mut self) -> bool {
        self.retreat()
    }

    /// Move one column right, stopping at `size`.
    pub fn move_right(&mut self, size: usize) -> bool {
        if self.col >= size {
            return false;
        }
        self.col += 1;
        true
    }

    /// Pull the cursor back inside `[0, size]`.
    pub fn clamp_to(&mut self, size: usize) {
        self.col = self.col.min(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_at_zero() {
        assert_eq!(Cursor::new().col(), 0);
        assert_eq!(Cursor::at(4).col(), 4);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut cursor = Cursor::new();
        cursor.advance(3);
        assert_eq!(cursor.col(), 3);
        assert!(cursor.retreat());
        assert_eq!(cursor.col(), 2);
    }

    #[test]
    fn test_retreat_at_zero() {
        let mut cursor = Cursor::new();
        assert!(!cursor.retreat());
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_move_right_bounded_by_size() {
        let mut cursor = Cursor::at(1);
        assert!(cursor.move_right(2));
        assert!(!cursor.move_right(2));
        assert_eq!(cursor.col(), 2);
    }

    #[test]
    fn test_move_left_bounded_by_zero() {
        let mut cursor = Cursor::at(1);
        assert!(cursor.move_left());
        assert!(!cursor.move_left());
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_clamp() {
        let mut cursor = Cursor::at(10);
        cursor.clamp_to(4);
        assert_eq!(cursor.col(), 4);
        cursor.clamp_to(8);
        assert_eq!(cursor.col(), 4);
    }
}
