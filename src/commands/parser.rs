//! Input line parsing.

use std::str::FromStr;

/// A command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add,
    /// `change <name> <old phone> <new phone>`
    Change,
    /// `phone <name>`
    Phone,
    /// `remove-phone <name> <phone>`
    RemovePhone,
    /// `delete <name>`
    Delete,
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// `birthdays`
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else
    Unknown(String),
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

/// Split a line into a command and its whitespace-separated arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.parse().ok()?;
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
