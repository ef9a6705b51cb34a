//! `line_edit` - single-line terminal text editor
//!
//! Edits one line of text in the terminal. Typed and pasted text is inserted
//! at the cursor, Backspace deletes before it, Left/Right move it. The line
//! is drawn on the first row with a status line below it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin line_edit
//! cargo run --bin line_edit -- --text "hello" --log /tmp/line_edit.log
//! cargo run --bin line_edit -- --headless-smoke
//! ```
//!
//! Press Ctrl+Q, Ctrl+C or Esc to quit. The final line is printed on exit.

use line_edit::input::{PASTE_END, PASTE_START, ParseError};
use line_edit::terminal::{Screen, enable_raw_mode, is_tty, poll_readable, terminal_size};
use line_edit::{
    EditorOptions, EditorSession, Event, Flow, InputParser, LineView, LogLevel, emit_log,
    set_log_callback,
};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "line_edit - single-line terminal text editor

USAGE:
    line_edit [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --text <TEXT>           Start with TEXT on the line, cursor at its end

    --no-alt-screen         Don't enter alternate screen
    --no-paste              Don't enable bracketed paste
    --poll-ms <N>           Input poll interval in milliseconds (default: 50)
    --log <PATH>            Append log messages to PATH

    --headless-smoke        Run headless smoke test (no TTY required)
    --headless-width <N>    View width for the smoke test (default: 80)

KEYS:
    Left / Right            Move the cursor
    Backspace               Delete the character before the cursor
    Ctrl+Q, Ctrl+C, Esc     Quit

EXAMPLES:
    line_edit                           # Empty line
    line_edit --text hello              # Edit \"hello\"
    line_edit --headless-smoke          # CI smoke test
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    // Editing
    pub initial_text: String,

    // Terminal options
    pub use_alt_screen: bool,
    pub bracketed_paste: bool,
    pub poll_interval: Duration,

    // Diagnostics
    pub log_path: Option<PathBuf>,

    // Headless/testing
    pub headless_smoke: bool,
    pub headless_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let options = EditorOptions::default();
        Self {
            initial_text: String::new(),
            use_alt_screen: options.use_alt_screen,
            bracketed_paste: options.bracketed_paste,
            poll_interval: options.poll_interval,
            log_path: None,
            headless_smoke: false,
            headless_width: 80,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--text" => match args.next() {
                    Some(v) => config.initial_text = v.to_string_lossy().to_string(),
                    None => return ParseResult::Error("--text requires a value".to_string()),
                },

                "--no-alt-screen" => config.use_alt_screen = false,
                "--no-paste" => config.bracketed_paste = false,

                "--poll-ms" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--poll-ms requires a value".to_string()),
                    };
                    match value.parse::<u64>() {
                        Ok(n) if n > 0 => config.poll_interval = Duration::from_millis(n),
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --poll-ms value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--log" => match args.next() {
                    Some(v) => config.log_path = Some(PathBuf::from(v)),
                    None => return ParseResult::Error("--log requires a path".to_string()),
                },

                "--headless-smoke" => config.headless_smoke = true,
                "--headless-width" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error(
                                "--headless-width requires a value".to_string(),
                            );
                        }
                    };
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => config.headless_width = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --headless-width value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    return ParseResult::Error(format!("Unexpected argument: {other}"));
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Get terminal options from config.
    #[must_use]
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            use_alt_screen: self.use_alt_screen,
            bracketed_paste: self.bracketed_paste,
            poll_interval: self.poll_interval,
            ..EditorOptions::default()
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Some(path) = &config.log_path {
                install_file_logger(path)?;
            }
            if config.headless_smoke {
                run_headless_smoke(&config)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Route library log messages to an append-only file.
fn install_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let file = Mutex::new(file);
    set_log_callback(move |level, message| {
        if let Ok(mut file) = file.lock() {
            let _ = writeln!(file, "[{}] {message}", level.as_str());
        }
    });
    emit_log(LogLevel::Info, &format!("logging to {}", path.display()));
    Ok(())
}

// ============================================================================
// Event Pump
// ============================================================================

/// Bytes read from the terminal that have not become events yet.
#[derive(Debug, Default)]
struct PendingInput {
    bytes: Vec<u8>,
    /// Length of the unfinished paste at the front of `bytes` that was
    /// already searched for its end marker.
    paste_scanned: usize,
    /// Set once a paste overflowed: input is dropped up to its end marker.
    discarding_paste: bool,
}

impl PendingInput {
    fn push(&mut self, read: &[u8]) {
        self.bytes.extend_from_slice(read);
    }

    /// Turn a lone ESC left over after input went quiet into Escape.
    fn flush_escape(&mut self, parser: &InputParser) -> Option<Event> {
        if self.discarding_paste {
            return None;
        }
        let (event, consumed) = parser.flush_escape(&self.bytes)?;
        self.bytes.drain(..consumed);
        Some(event)
    }
}

/// Feed every complete event in `pending` to the session and remove the
/// consumed bytes. A trailing partial sequence is left in place.
fn drain_events(
    parser: &InputParser,
    session: &mut EditorSession,
    pending: &mut PendingInput,
) -> Flow {
    let mut offset = 0;
    let mut scanned = std::mem::take(&mut pending.paste_scanned);
    let mut flow = Flow::Continue;

    while flow == Flow::Continue {
        if pending.discarding_paste {
            match parser.find_paste_end(&pending.bytes[offset..]) {
                Some(end) => {
                    offset += end;
                    pending.discarding_paste = false;
                    emit_log(LogLevel::Debug, "end of discarded paste");
                    continue;
                }
                None => {
                    // Keep what could be the start of a split end marker.
                    let keep = PASTE_END.len() - 1;
                    offset = offset.max(pending.bytes.len().saturating_sub(keep));
                    break;
                }
            }
        }

        match parser.parse_resuming(&pending.bytes[offset..], std::mem::take(&mut scanned)) {
            Ok((event, consumed)) => {
                offset += consumed;
                // Rejected edits are already logged by the session.
                flow = session.handle_event(&event).unwrap_or(Flow::Continue);
            }
            Err(ParseError::Empty | ParseError::Incomplete) => {
                let rest = &pending.bytes[offset..];
                if rest.starts_with(PASTE_START) {
                    pending.paste_scanned = rest.len();
                }
                break;
            }
            Err(ParseError::UnrecognizedSequence(seq)) => {
                emit_log(
                    LogLevel::Debug,
                    &format!("skipping unrecognized sequence {:?}", String::from_utf8_lossy(&seq)),
                );
                offset += seq.len().max(1);
            }
            Err(ParseError::InvalidUtf8) => {
                emit_log(LogLevel::Debug, "skipping invalid UTF-8 byte");
                offset += 1;
            }
            Err(ParseError::PasteBufferOverflow) => {
                emit_log(
                    LogLevel::Warn,
                    &format!(
                        "paste larger than {} bytes, discarding it",
                        parser.max_paste_size()
                    ),
                );
                pending.discarding_paste = true;
            }
        }
    }

    pending.bytes.drain(..offset);
    flow
}

fn status_line(session: &EditorSession) -> String {
    let line = session.line();
    format!(
        "col {}  size {}  capacity {}  |  Ctrl+Q quit",
        session.col(),
        line.size(),
        line.capacity()
    )
}

// ============================================================================
// Headless Smoke Test
// ============================================================================

/// Keystrokes for the smoke test, starting from an empty line: type "helo",
/// go back and fix it, delete the last character, then try to delete at the
/// start of the line and quit.
const SMOKE_INPUT: &[u8] = b"helo\x1b[Dl\x1b[C\x7f\x1b[D\x1b[D\x1b[D\x1b[D\x7f\x11";

/// Run headless smoke test (no TTY required).
fn run_headless_smoke(config: &Config) -> io::Result<()> {
    let width = config.headless_width;
    eprintln!("Running headless smoke test (width {width})...");

    let parser = InputParser::new();
    let mut session = EditorSession::new();
    let mut pending = PendingInput::default();
    pending.push(SMOKE_INPUT);

    let flow = drain_events(&parser, &mut session, &mut pending);
    if flow != Flow::Quit || !pending.bytes.is_empty() {
        return Err(io::Error::other("smoke input was not fully consumed"));
    }
    if session.line().as_bytes() != b"hell" || session.col() != 0 {
        return Err(io::Error::other(format!(
            "unexpected line {:?} with cursor at {}",
            session.line().to_string_lossy(),
            session.col()
        )));
    }

    let mut view = LineView::new(width);
    let frame = view.layout(session.line(), session.cursor());
    let mut out = Vec::new();
    {
        let mut screen = Screen::enter(&mut out, &config.editor_options())?;
        screen.draw(&frame, Some(status_line(&session).as_str()))?;
    }
    if frame.cursor_glyph != Some('h') || out.is_empty() {
        return Err(io::Error::other("cursor cell was not rendered"));
    }

    eprintln!("Headless smoke test PASSED");
    eprintln!("  Line: {:?}", session.line().to_string_lossy());
    eprintln!("  {}", status_line(&session));
    eprintln!("  Output: {} bytes", out.len());
    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

/// Run interactive mode with terminal.
fn run_interactive(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    // Check for TTY
    if !is_tty(&stdin) || !is_tty(&stdout) {
        eprintln!("Error: stdin/stdout is not a terminal");
        eprintln!();
        eprintln!("line_edit requires an interactive terminal to run.");
        eprintln!("For non-interactive use, try: line_edit --headless-smoke");
        std::process::exit(1);
    }

    let mut session = match EditorSession::with_text(&config.initial_text) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let options = config.editor_options();

    let raw_guard = enable_raw_mode()?;
    let mut screen = Screen::enter(stdout.lock(), &options)?;

    let parser = InputParser::new();
    let mut view = LineView::new(80);
    let mut pending = PendingInput::default();
    let mut input_buf = [0u8; 4096];
    let mut input = stdin.lock();
    let mut dirty = true;

    loop {
        // --- Render phase ---
        if let Ok((cols, _rows)) = terminal_size() {
            if view.width() != usize::from(cols) {
                view.set_width(usize::from(cols));
                dirty = true;
            }
        }
        if dirty {
            let frame = view.layout(session.line(), session.cursor());
            screen.draw(&frame, Some(status_line(&session).as_str()))?;
            dirty = false;
        }

        // --- Input phase ---
        if poll_readable(&stdin, options.poll_interval)? {
            let n = match input.read(&mut input_buf) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if n == 0 {
                emit_log(LogLevel::Info, "stdin closed");
                break;
            }
            pending.push(&input_buf[..n]);
        } else if let Some(event) = pending.flush_escape(&parser) {
            // Input went quiet after a bare ESC: it was the Escape key.
            if session.handle_event(&event).unwrap_or(Flow::Continue) == Flow::Quit {
                break;
            }
            continue;
        } else {
            continue;
        }

        dirty = true;
        if drain_events(&parser, &mut session, &mut pending) == Flow::Quit {
            break;
        }
    }

    drop(screen);
    drop(raw_guard);

    println!("{}", session.line().to_string_lossy());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
