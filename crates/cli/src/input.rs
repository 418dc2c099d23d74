//! Line sources for the shell.
//!
//! Interactive mode: rustyline prompt with in-memory history.
//! Pipe mode: read lines from any `BufRead`, prompts are not echoed.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

/// Where the shell reads menu choices and arguments from.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns `None` at end of input (Ctrl-D or the end of piped stdin).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Interactive terminal input through rustyline.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    /// Set up the line editor.
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Terminal {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Some(line);
                }
                // Ctrl-C: ask again
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    warn!(target: "stockroom::shell", error = %err, "Terminal read failed");
                    return None;
                }
            }
        }
    }
}

/// Line-by-line input from a reader, such as piped stdin.
pub struct Piped<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Piped<R> {
    /// Read lines from `reader`.
    pub fn new(reader: R) -> Self {
        Piped {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                warn!(target: "stockroom::shell", error = %err, "Input read failed");
                None
            }
        }
    }
}
