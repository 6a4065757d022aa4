//! Interactive read-eval-print loop.
//!
//! Reads one command per line, executes it against the address book,
//! prints the reply and persists the book after every successful mutating
//! command. Errors from a single command are printed as one line and the
//! loop keeps going; nothing a user types can kill the session.

use crate::command::{execute, parse, Outcome};
use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use crate::storage::ContactStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Prompt printed before every command.
const PROMPT: &str = "Enter command>> ";

/// One interactive session over an input/output pair.
///
/// Generic over the reader and writer so tests can run scripted sessions
/// without a terminal.
pub struct Session<R, W> {
    book: AddressBook,
    store: ContactStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: AddressBook, store: ContactStore, input: R, output: W) -> Self {
        Self {
            book,
            store,
            input,
            output,
        }
    }

    /// Run the loop until a bye command or end of input.
    ///
    /// Only I/O failures on the session's own input or output abort the
    /// loop; everything else is reported and survived. End of input saves
    /// and exits the same way the bye commands do.
    pub fn run(mut self) -> std::io::Result<()> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                self.save_and_report();
                writeln!(self.output, "Good bye!")?;
                return Ok(());
            }

            let outcome: CommandResult<Outcome> = parse(line.trim())
                .map_err(CommandError::from)
                .and_then(|command| execute(&mut self.book, command));

            match outcome {
                Ok(Outcome::Reply { message, mutated }) => {
                    writeln!(self.output, "{}", message)?;
                    if mutated {
                        self.save_and_report();
                    }
                }
                Ok(Outcome::Exit { message }) => {
                    self.save_and_report();
                    writeln!(self.output, "{}", message)?;
                    return Ok(());
                }
                Err(error) => {
                    debug!(%error, "command failed");
                    writeln!(self.output, "{}", error)?;
                }
            }
        }
    }

    // Persist the book; a failed save is reported on the session output
    // but never ends the loop.
    fn save_and_report(&mut self) {
        if let Err(error) = self.store.save(&self.book) {
            warn!(%error, "failed to persist address book");
            let _ = writeln!(self.output, "{}", error);
        }
    }
}
