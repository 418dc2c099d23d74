//! The menu loop.
//!
//! Reads a choice, prompts for its arguments, runs the command and prints
//! the result. Exit or end of input saves the inventory.

use std::io::Write;

use stockroom_executor::Executor;
use tracing::info;

use crate::format::{format_error, format_output, heading, OutputMode};
use crate::input::LineSource;
use crate::menu::{read_command, MenuChoice, PromptError};

const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Interactive or piped menu session over one executor.
pub struct Shell<S, W, E> {
    executor: Executor,
    source: S,
    out: W,
    err: E,
    mode: OutputMode,
    show_menu: bool,
}

impl<S: LineSource, W: Write, E: Write> Shell<S, W, E> {
    /// Results go to `out`, errors to `err`.
    pub fn new(executor: Executor, source: S, out: W, err: E, mode: OutputMode) -> Self {
        Shell {
            executor,
            source,
            out,
            err,
            mode,
            show_menu: false,
        }
    }

    /// Print the menu before every choice.
    pub fn with_menu(mut self, show: bool) -> Self {
        self.show_menu = show;
        self
    }

    /// Run until exit or end of input, then save.
    ///
    /// Returns the process exit code: 0 when the save succeeds, 1 otherwise.
    pub fn run(mut self) -> i32 {
        self.run_loop();
        self.finish()
    }

    fn run_loop(&mut self) {
        loop {
            if self.show_menu {
                let _ = write!(self.out, "{}", MenuChoice::menu());
                let _ = self.out.flush();
            }

            let line = match self.source.read_line(CHOICE_PROMPT) {
                Some(line) => line,
                None => return,
            };
            if line.trim().is_empty() {
                continue;
            }

            let choice: MenuChoice = match line.parse() {
                Ok(choice) => choice,
                Err(e) => {
                    let _ = writeln!(self.err, "{}", format_error(&e, self.mode));
                    continue;
                }
            };

            let cmd = match read_command(&mut self.source, choice) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => return,
                Err(PromptError::EndOfInput) => return,
                Err(PromptError::Invalid(e)) => {
                    let _ = writeln!(self.err, "{}", format_error(&e, self.mode));
                    continue;
                }
            };

            let title = heading(&cmd);
            match self.executor.execute(cmd) {
                Ok(output) => {
                    let _ = writeln!(self.out, "{}", format_output(&output, &title, self.mode));
                }
                Err(e) => {
                    let _ = writeln!(self.err, "{}", format_error(&e, self.mode));
                }
            }
        }
    }

    fn finish(self) -> i32 {
        let Shell {
            executor,
            mut out,
            mut err,
            mode,
            ..
        } = self;

        let path = executor.data_path();
        match executor.shutdown() {
            Ok(saved) => {
                info!(target: "stockroom::shell", saved, "Shell exiting");
                if mode == OutputMode::Human {
                    let _ = writeln!(out, "Saved {} products to {}.", saved, path.display());
                }
                0
            }
            Err(e) => {
                let _ = writeln!(err, "{}", format_error(&e, mode));
                1
            }
        }
    }
}
