//! Interactive session use case

use crate::cli::output::{
    COMMAND_PROMPT, EMPTY_COMMAND_WARNING, EMPTY_NAME_WARNING, FAREWELL, NAME_PROMPT, WELCOME,
};
use crate::cli::{format_history, format_response, Command};
use crate::domain::catalog;
use crate::error::Result;
use crate::infrastructure::HabitStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Drives the greeting, name prompt and command loop over any reader/writer
pub struct SessionService<R, W> {
    input: R,
    output: W,
    storage_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> SessionService<R, W> {
    /// Create a session; `storage_path` of None keeps the log in memory
    pub fn new(input: R, output: W, storage_path: Option<PathBuf>) -> Self {
        SessionService {
            input,
            output,
            storage_path,
        }
    }

    /// Run until the user types `exit` or input ends.
    ///
    /// Returns the store so callers can inspect what was logged, or None
    /// when input ended before a name was given.
    pub fn run(mut self) -> Result<Option<HabitStore>> {
        writeln!(self.output, "{}", WELCOME)?;

        let Some(user_name) = self.prompt_name()? else {
            info!("input closed before a name was entered");
            return Ok(None);
        };

        let mut store = HabitStore::new(user_name, self.storage_path.take());
        info!(user = %store.user_name(), "session started");

        loop {
            write!(self.output, "{}", COMMAND_PROMPT)?;
            self.output.flush()?;

            let command = match self.read_line()? {
                Some(line) => Command::parse(&line),
                None => Command::Exit,
            };
            debug!(?command, "parsed command");

            match command {
                Command::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    break;
                }
                Command::History => {
                    let listing = format_history(store.user_name(), store.history());
                    writeln!(self.output, "{}", listing.trim_end())?;
                }
                Command::Empty => {
                    writeln!(self.output, "{}", EMPTY_COMMAND_WARNING)?;
                }
                Command::Track(habit) => {
                    if !catalog::is_known(&habit) {
                        debug!(habit = %habit, "no dedicated message, using generic response");
                    }
                    store.record(&habit);
                    writeln!(self.output, "{}", format_response(store.user_name(), &habit))?;
                }
            }
        }

        info!(user = %store.user_name(), entries = store.len(), "session ended");
        Ok(Some(store))
    }

    fn prompt_name(&mut self) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", NAME_PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let name = line.trim();
            if !name.is_empty() {
                return Ok(Some(name.to_string()));
            }
            writeln!(self.output, "{}", EMPTY_NAME_WARNING)?;
        }
    }

    /// Read one line, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
