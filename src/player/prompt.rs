//! Search-selection input source
//!
//! Presenting search results ends with a blocking one-line read asking
//! the user to pick a result. The read sits behind a trait so the
//! controller can be driven by scripted input in tests instead of a
//! real terminal.

use std::collections::VecDeque;
use std::io::BufRead;

/// One-line input source for the search-selection prompt
pub trait SelectionPrompt {
    /// Read a single line; None on end of input
    fn read_line(&mut self) -> Option<String>;
}

/// Reads selections from stdin (interactive use)
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionPrompt for StdinPrompt {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

/// Feeds pre-scripted replies, one per read
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn read_line(&mut self) -> Option<String> {
        self.replies.pop_front()
    }
}
