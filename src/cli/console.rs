//! Line-oriented console
//!
//! Wraps an input reader and an output writer so the interactive flows run
//! the same against a terminal or in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{LedgerError, LedgerResult};

/// Token that abandons the current multi-step prompt sequence
pub const GO_BACK_TOKEN: &str = "B";

/// Check if an answer is the go-back token (case-insensitive, trimmed)
pub fn is_go_back(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(GO_BACK_TOKEN)
}

/// A prompt/answer console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text as-is and flush
    pub fn write(&mut self, text: &str) -> LedgerResult<()> {
        self.output.write_all(text.as_bytes()).map_err(terminal)?;
        self.output.flush().map_err(terminal)
    }

    /// Write one line
    pub fn say(&mut self, line: impl Display) -> LedgerResult<()> {
        writeln!(self.output, "{}", line).map_err(terminal)
    }

    /// Show a prompt and read one line without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        self.write(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(terminal)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read an answer inside a multi-step operation
    ///
    /// Returns `None` if the user typed the go-back token or input ended.
    pub fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        Ok(self.read_line(prompt)?.filter(|answer| !is_go_back(answer)))
    }

    /// Wait for Enter before returning to the menu
    pub fn pause(&mut self) -> LedgerResult<()> {
        self.read_line("\nPress Enter to return to the main menu...")?;
        Ok(())
    }
}

fn terminal(err: io::Error) -> LedgerError {
    LedgerError::Terminal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_go_back_token() {
        assert!(is_go_back("b"));
        assert!(is_go_back(" B \t"));
        assert!(!is_go_back("bb"));
        assert!(!is_go_back(""));
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut console = console("hello \r\nworld");
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("hello "));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(console.read_line("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > ");
    }

    #[test]
    fn test_ask_filters_go_back() {
        let mut console = console("b\n\nvalue\n");
        assert_eq!(console.ask("? ").unwrap(), None);
        assert_eq!(console.ask("? ").unwrap().as_deref(), Some(""));
        assert_eq!(console.ask("? ").unwrap().as_deref(), Some("value"));
        assert_eq!(console.ask("? ").unwrap(), None);
    }
}
