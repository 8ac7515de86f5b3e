//! Command handlers.
//!
//! Every handler takes the command's arguments and the address book and
//! either returns a [`Reply`] or one of the three [`CommandError`] kinds.
//! [`execute`] turns those errors into their fixed user-facing messages.

use super::parser::Command;
use super::reply::Reply;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, DEFAULT_UPCOMING_DAYS};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Settings the handlers need besides the book itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Window for the `birthdays` command, in days
    pub upcoming_days: i64,

    /// Fixed evaluation date; `None` means today's local date
    pub today: Option<NaiveDate>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            today: None,
        }
    }
}

/// Run one command against the book and produce the reply to print.
pub fn execute(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> Reply {
    debug!("Executing {:?} with {} args", command, args.len());

    let result = match command {
        Command::Hello => Ok(Reply::text("How can I help you?")),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::RemovePhone => remove_phone(args, book),
        Command::Delete => delete_contact(args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays(book, ctx)),
        Command::Exit => Ok(Reply::Exit),
        Command::Unknown(_) => Ok(Reply::text("Invalid command.")),
    };

    result.unwrap_or_else(|err| {
        warn!("Command {:?} failed: {}", command, err);
        Reply::text(err.user_message())
    })
}

/// The `index`-th argument, or `MissingArgument`.
fn arg<'a>(args: &'a [String], index: usize, command: &str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CommandError::MissingArgument(command.to_string()))
}

fn find_record<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "add")?;
    let phone = arg(args, 1, "add")?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::text("Contact updated."));
    }

    // Only store the new record once its first phone has validated
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::text("Contact added."))
}

/// `change <name> <old> <new>`: replace one phone with another.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "change")?;
    let old = arg(args, 1, "change")?;
    let new = arg(args, 2, "change")?;

    find_record(book, name)?.edit_phone(old, new)?;
    Ok(Reply::text("Contact updated."))
}

/// `phone <name>`: list a contact's phones.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "phone")?;
    let record = find_record(book, name)?;
    let phones = record.phones().iter().map(|p| p.to_string()).collect();
    Ok(Reply::Phones(phones))
}

/// `remove-phone <name> <phone>`: drop a phone from a contact.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "remove-phone")?;
    let phone = arg(args, 1, "remove-phone")?;

    if find_record(book, name)?.remove_phone(phone) {
        Ok(Reply::text("Phone removed."))
    } else {
        Ok(Reply::text(format!(
            "Phone number {} for the contact of {} not identified.",
            phone, name
        )))
    }
}

/// `delete <name>`: remove a contact.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "delete")?;
    book.delete(name)?;
    Ok(Reply::text("Contact deleted."))
}

/// `all`: every contact.
pub fn show_all(book: &AddressBook) -> Reply {
    Reply::Text(book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "add-birthday")?;
    let birthday = arg(args, 1, "add-birthday")?;

    find_record(book, name)?.add_birthday(birthday)?;
    Ok(Reply::text("Birthday added."))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<Reply> {
    let name = arg(args, 0, "show-birthday")?;
    let record = find_record(book, name)?;

    Ok(match record.birthday() {
        Some(birthday) => Reply::text(birthday.as_str()),
        None => Reply::text("No birthday set."),
    })
}

/// `birthdays`: who to congratulate within the configured window.
pub fn birthdays(book: &AddressBook, ctx: &CommandContext) -> Reply {
    let upcoming = match ctx.today {
        Some(today) => book.upcoming_birthdays_from(today, ctx.upcoming_days),
        None => book.get_upcoming_birthdays(ctx.upcoming_days),
    };
    Reply::Birthdays(upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["John", "1111111111"]), &mut book),
            Ok(Reply::text("Contact added."))
        );
        assert_eq!(
            add_contact(&args(&["John", "2222222222"]), &mut book),
            Ok(Reply::text("Contact updated."))
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_stores_nothing() {
        let mut book = AddressBook::new();
        let result = add_contact(&args(&["John", "123"]), &mut book);
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_missing_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["John"]), &mut book),
            Err(CommandError::MissingArgument("add".to_string()))
        );
        assert_eq!(
            show_phone(&[], &mut book),
            Err(CommandError::MissingArgument("phone".to_string()))
        );
    }

    #[test]
    fn test_change_unknown_contact_is_not_found() {
        let mut book = AddressBook::new();
        let result = change_contact(&args(&["Ghost", "1111111111", "2222222222"]), &mut book);
        assert_eq!(result, Err(CommandError::NotFound("Ghost".to_string())));
    }

    #[test]
    fn test_show_birthday_without_one() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();
        assert_eq!(
            show_birthday(&args(&["John"]), &mut book),
            Ok(Reply::text("No birthday set."))
        );
    }

    #[test]
    fn test_execute_maps_errors_to_messages() {
        let mut book = AddressBook::new();
        let ctx = CommandContext::default();

        let reply = execute(&Command::Add, &args(&["John", "12"]), &mut book, &ctx);
        assert_eq!(reply, Reply::text("Give me name and phone, please."));

        let reply = execute(&Command::Phone, &args(&["John"]), &mut book, &ctx);
        assert_eq!(
            reply,
            Reply::text("Oops, contact not found. Enter the existing in Contacts name.")
        );

        let reply = execute(&Command::ShowBirthday, &[], &mut book, &ctx);
        assert_eq!(
            reply,
            Reply::text("Enter the argument for the command, please.")
        );
    }

    #[test]
    fn test_execute_unknown_and_exit() {
        let mut book = AddressBook::new();
        let ctx = CommandContext::default();
        assert_eq!(
            execute(&Command::Unknown("x".into()), &[], &mut book, &ctx),
            Reply::text("Invalid command.")
        );
        assert_eq!(execute(&Command::Exit, &[], &mut book, &ctx), Reply::Exit);
    }
}
