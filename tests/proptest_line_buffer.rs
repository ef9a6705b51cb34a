//! Property-based tests for the line buffer and the editing session.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use line_edit::{EditCommand, EditorSession, Error, LineBuffer};
use proptest::prelude::*;
use proptest::sample::Index;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary byte fragments, including control and non-ASCII bytes.
fn fragment() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

/// A line buffer with arbitrary starting content.
fn line_buffer() -> impl Strategy<Value = LineBuffer> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(|bytes| {
        let mut line = LineBuffer::new();
        line.insert_text_after(&bytes, 0).unwrap();
        line
    })
}

/// One mutation with a column chosen relative to the size at apply time.
#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, Index),
    Backspace(Index),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (fragment(), any::<Index>()).prop_map(|(text, at)| Op::Insert(text, at)),
        any::<Index>().prop_map(Op::Backspace),
    ]
}

/// Editing commands as a user would issue them.
fn command() -> impl Strategy<Value = EditCommand> {
    prop_oneof![
        "[\\x20-\\x7E]{1,4}".prop_map(|s| EditCommand::InsertText(s.into_bytes())),
        "\\PC{1,3}".prop_map(|s| EditCommand::InsertText(s.into_bytes())),
        prop::collection::vec(any::<u8>(), 1..4).prop_map(EditCommand::InsertText),
        Just(EditCommand::Backspace),
        Just(EditCommand::MoveLeft),
        Just(EditCommand::MoveRight),
    ]
}

// ============================================================================
// LineBuffer Properties
// ============================================================================

proptest! {
    /// Insert splices the fragment in at the column.
    #[test]
    fn insert_splices_at_column(mut line in line_buffer(), text in fragment(), at in any::<Index>()) {
        let before = line.as_bytes().to_vec();
        let col = at.index(before.len() + 1);

        line.insert_text_after(&text, col).unwrap();

        let mut expected = before[..col].to_vec();
        expected.extend_from_slice(&text);
        expected.extend_from_slice(&before[col..]);
        prop_assert_eq!(line.as_bytes(), expected.as_slice());
        prop_assert_eq!(line.size(), before.len() + text.len());
    }

    /// Backspace removes exactly the byte before the column.
    #[test]
    fn backspace_removes_preceding_byte(mut line in line_buffer(), at in any::<Index>()) {
        prop_assume!(!line.is_empty());
        let before = line.as_bytes().to_vec();
        let col = 1 + at.index(before.len());

        let removed = line.backspace(col).unwrap();

        prop_assert_eq!(removed, Some(before[col - 1]));
        let mut expected = before[..col - 1].to_vec();
        expected.extend_from_slice(&before[col..]);
        prop_assert_eq!(line.as_bytes(), expected.as_slice());
        prop_assert_eq!(line.size(), before.len() - 1);
    }

    /// Backspace at column zero changes nothing.
    #[test]
    fn backspace_at_zero_is_noop(mut line in line_buffer()) {
        let before = line.clone();
        prop_assert_eq!(line.backspace(0).unwrap(), None);
        prop_assert_eq!(line, before);
    }

    /// Inserting nothing changes nothing, at any valid column.
    #[test]
    fn empty_insert_is_noop(mut line in line_buffer(), at in any::<Index>()) {
        let before = line.clone();
        let col = at.index(line.size() + 1);
        line.insert_text_after(b"", col).unwrap();
        prop_assert_eq!(line, before);
    }

    /// Columns past the end are rejected and leave the buffer untouched.
    #[test]
    fn out_of_range_column_rejected(mut line in line_buffer(), text in fragment(), past in 1usize..100) {
        let before = line.clone();
        let col = line.size() + past;

        let err = line.insert_text_after(&text, col).unwrap_err();
        let is_invalid_column = matches!(err, Error::InvalidColumn { .. });
        prop_assert!(is_invalid_column);
        let err = line.backspace(col).unwrap_err();
        let is_invalid_column = matches!(err, Error::InvalidColumn { .. });
        prop_assert!(is_invalid_column);
        prop_assert_eq!(line, before);
    }

    /// Capacity never drops below size, whatever the sequence of edits, and
    /// the buffer always matches a plain vector given the same edits.
    #[test]
    fn capacity_covers_size_and_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut line = LineBuffer::new();
        let mut model: Vec<u8> = Vec::new();
        let mut last_capacity = 0;

        for op in ops {
            match op {
                Op::Insert(text, at) => {
                    let col = at.index(model.len() + 1);
                    line.insert_text_after(&text, col).unwrap();
                    model.splice(col..col, text);
                }
                Op::Backspace(at) => {
                    let col = at.index(model.len() + 1);
                    line.backspace(col).unwrap();
                    if col > 0 {
                        model.remove(col - 1);
                    }
                }
            }
            prop_assert!(line.capacity() >= line.size());
            prop_assert!(line.capacity() >= last_capacity, "capacity must never shrink");
            last_capacity = line.capacity();
            prop_assert_eq!(line.as_bytes(), model.as_slice());
        }
    }

    /// Appending N single bytes reallocates O(log N) times.
    #[test]
    fn single_byte_appends_grow_amortized(n in 1usize..4096) {
        let mut line = LineBuffer::new();
        let mut reallocations = 0u32;
        let mut capacity = line.capacity();

        for i in 0..n {
            line.insert_text_after(b"x", i).unwrap();
            if line.capacity() != capacity {
                reallocations += 1;
                capacity = line.capacity();
            }
        }

        let log2_n = usize::BITS - n.leading_zeros();
        prop_assert_eq!(line.size(), n);
        prop_assert!(
            reallocations <= log2_n + 1,
            "{} reallocations for {} appends", reallocations, n
        );
    }
}

// ============================================================================
// Session Properties
// ============================================================================

proptest! {
    /// The cursor stays within `[0, size]` after every command.
    #[test]
    fn session_cursor_stays_in_bounds(commands in prop::collection::vec(command(), 0..64)) {
        let mut session = EditorSession::new();
        for command in commands {
            session.apply(command).unwrap();
            prop_assert!(session.col() <= session.line().size());
        }
    }

    /// Typing a fragment leaves the cursor right after it.
    #[test]
    fn session_insert_advances_by_length(
        prefix in "[a-z]{0,10}",
        moves in 0usize..12,
        text in "\\PC{1,8}",
    ) {
        let mut session = EditorSession::with_text(&prefix).unwrap();
        for _ in 0..moves {
            session.apply(EditCommand::MoveLeft).unwrap();
        }
        let col = session.col();
        prop_assert_eq!(col, prefix.len().saturating_sub(moves));

        session.apply(EditCommand::InsertText(text.clone().into_bytes())).unwrap();

        prop_assert_eq!(session.col(), col + text.len());
        let expected = format!("{}{}{}", &prefix[..col], text, &prefix[col..]);
        prop_assert_eq!(session.line().as_bytes(), expected.as_bytes());
    }
}
