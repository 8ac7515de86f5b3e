//! Interactive read-eval-print session.
//!
//! Reads one command per line, runs it against the address book and writes
//! the reply. The session ends on `close`/`exit` or at end of input.

use crate::commands::{execute, parse_input, CommandContext, Reply};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Greeting printed when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter a command: ";

/// One interactive session over an address book.
pub struct Session {
    book: AddressBook,
    ctx: CommandContext,
}

impl Session {
    /// Create a session over `book`.
    pub fn new(book: AddressBook, ctx: CommandContext) -> Self {
        Self { book, ctx }
    }

    /// The book as it currently stands.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// End the session and hand back the book for saving.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle a single input line. Returns `None` for a blank line.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        Some(execute(&command, &args, &mut self.book, &self.ctx))
    }

    /// Run until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                info!("End of input, closing session");
                writeln!(output)?;
                break;
            };

            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("Skipping unreadable input line: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", reply)?;
            if reply == Reply::Exit {
                break;
            }
        }
        Ok(())
    }
}

/// Load the book from `repo`, run a session over it and save the result.
///
/// The book is saved even when reading input fails part way through.
pub fn run_with_repository<B, R, W>(
    repo: &B,
    ctx: CommandContext,
    input: R,
    output: W,
) -> Result<()>
where
    B: BookRepository,
    R: BufRead,
    W: Write,
{
    let book = repo.load().context("loading address book")?;
    let mut session = Session::new(book, ctx);

    let run_result = session.run(input, output);

    repo.save(session.book()).context("saving address book")?;
    run_result.context("reading commands")?;
    Ok(())
}
