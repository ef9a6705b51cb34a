//! Editor configuration.

use std::time::Duration;

/// Options controlling how the editor drives the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Use the alternate screen buffer.
    pub use_alt_screen: bool,
    /// Ask the terminal to bracket pasted text, so a paste arrives as one
    /// text fragment instead of a burst of key presses.
    pub bracketed_paste: bool,
    /// Window title, if any.
    pub title: Option<String>,
    /// How long to wait for input before redrawing.
    pub poll_interval: Duration,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            use_alt_screen: true,
            bracketed_paste: true,
            title: Some("Text Editor".to_string()),
            poll_interval: Duration::from_millis(50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EditorOptions::default();
        assert!(options.use_alt_screen);
        assert!(options.bracketed_paste);
        assert_eq!(options.title.as_deref(), Some("Text Editor"));
        assert_eq!(options.poll_interval, Duration::from_millis(50));
    }
}
