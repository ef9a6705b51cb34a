//! Fuzz target for line buffer edits.
//!
//! Applies arbitrary insert/backspace sequences, including invalid columns,
//! and checks the buffer against a plain vector model after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use line_edit::LineBuffer;

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { text: Vec<u8>, col: u16 },
    Backspace { col: u16 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut line = LineBuffer::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            Op::Insert { text, col } => {
                let col = usize::from(col);
                let result = line.insert_text_after(&text, col);
                if col <= model.len() {
                    assert!(result.is_ok());
                    model.splice(col..col, text);
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Backspace { col } => {
                let col = usize::from(col);
                let result = line.backspace(col);
                if col > model.len() {
                    assert!(result.is_err());
                } else if col == 0 {
                    assert_eq!(result.ok(), Some(None));
                } else {
                    assert_eq!(result.ok(), Some(Some(model.remove(col - 1))));
                }
            }
        }

        assert!(line.capacity() >= line.size());
        assert_eq!(line.as_bytes(), model.as_slice());
    }
});
