//! Assistant commands.
//!
//! This module turns one line of user input into a command, runs it
//! against the address book and renders the reply:
//! - **parser**: splits a line into a command token and its arguments
//! - **handlers**: one function per command, plus the dispatcher
//! - **reply**: what a command hands back to be printed

pub mod handlers;
pub mod parser;
pub mod reply;

pub use handlers::{execute, CommandContext};
pub use parser::{parse_input, Command};
pub use reply::Reply;
