//! Fuzz target for the terminal input parser.
//!
//! Feeds arbitrary bytes through the parser and into an editing session the
//! way the interactive loop does. Nothing may panic and every step must make
//! progress.

#![no_main]

use libfuzzer_sys::fuzz_target;
use line_edit::EditorSession;
use line_edit::input::{InputParser, ParseError};

fuzz_target!(|data: &[u8]| {
    let parser = InputParser::with_max_paste_size(1024);
    let mut session = EditorSession::new();

    let mut remaining = data;
    while !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((event, consumed)) => {
                assert!(consumed > 0 && consumed <= remaining.len());
                remaining = &remaining[consumed..];
                let _ = session.handle_event(&event);
            }
            Err(ParseError::Empty) => break,
            Err(ParseError::Incomplete) => {
                // Same as the editor going idle: a lone ESC becomes Escape.
                match parser.flush_escape(remaining) {
                    Some((event, consumed)) => {
                        remaining = &remaining[consumed..];
                        let _ = session.handle_event(&event);
                    }
                    None => break,
                }
            }
            Err(ParseError::UnrecognizedSequence(seq)) => {
                assert!(!seq.is_empty() && seq.len() <= remaining.len());
                remaining = &remaining[seq.len()..];
            }
            Err(ParseError::InvalidUtf8) => remaining = &remaining[1..],
            Err(ParseError::PasteBufferOverflow) => break,
        }

        assert!(session.col() <= session.line().size());
    }
});
