//! Command handlers
//!
//! Every handler returns an `AddressBookResult<String>`. [`execute`] turns
//! errors into short user-facing messages with [`error_message`], so no
//! error ever reaches the session loop.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Settings;
use crate::display::format_upcoming_birthdays;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Record};

use super::commands::{find_command, CommandKind};
use super::parser::ParsedInput;

pub const INVALID_COMMAND: &str = "Invalid command.";
pub const INVALID_FORMAT: &str = "Invalid command format.";
pub const INVALID_VALUE: &str = "Give me a valid name and phone number please";
pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const CONTACT_OR_BIRTHDAY_NOT_FOUND: &str = "Contact or birthday not found";
pub const HELLO_REPLY: &str = "How can I help you?";

/// What the session should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print a message
    Reply(String),
    /// Print every contact through the view
    ShowContacts,
    /// Print the command help
    ShowHelp,
    /// Save and end the session
    Exit,
}

/// Inputs to the birthday query that come from outside the book
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub today: NaiveDate,
    pub window_days: u64,
}

impl CommandContext {
    /// Context for the current local date
    pub fn current(settings: &Settings) -> Self {
        Self {
            today: Local::now().date_naive(),
            window_days: settings.upcoming_window_days,
        }
    }
}

/// Dispatch a parsed line to its handler
pub fn execute(book: &mut AddressBook, input: &ParsedInput, ctx: &CommandContext) -> Outcome {
    let Some(command) = find_command(&input.command) else {
        debug!(command = %input.command, "unknown command");
        return Outcome::Reply(INVALID_COMMAND.to_string());
    };

    let args = input.args.as_slice();
    match command.kind {
        CommandKind::Add => reply(add_contact(args, book)),
        CommandKind::Change => reply(change_contact(args, book)),
        CommandKind::Phone => reply(show_phone(args, book)),
        CommandKind::All => Outcome::ShowContacts,
        CommandKind::AddBirthday => reply(add_birthday(args, book)),
        CommandKind::ShowBirthday => reply(show_birthday(args, book)),
        CommandKind::Birthdays => reply(birthdays(book, ctx)),
        CommandKind::Hello => Outcome::Reply(HELLO_REPLY.to_string()),
        CommandKind::Help => Outcome::ShowHelp,
        CommandKind::Exit => Outcome::Exit,
    }
}

/// Convert a handler result into the message shown to the user
fn reply(result: AddressBookResult<String>) -> Outcome {
    Outcome::Reply(result.unwrap_or_else(|err| {
        debug!(error = %err, "command failed");
        error_message(&err)
    }))
}

/// Short user-facing text for a handler error
pub fn error_message(err: &AddressBookError) -> String {
    match err {
        AddressBookError::Validation(_) => INVALID_VALUE.to_string(),
        AddressBookError::NotFound {
            entity_type: "Birthday",
            ..
        } => CONTACT_OR_BIRTHDAY_NOT_FOUND.to_string(),
        AddressBookError::NotFound { .. } => CONTACT_NOT_FOUND.to_string(),
        AddressBookError::InvalidInput(_) => INVALID_FORMAT.to_string(),
        other => other.to_string(),
    }
}

/// Destructure exactly `N` arguments
fn arguments<const N: usize>(args: &[String]) -> AddressBookResult<[&str; N]> {
    if args.len() != N {
        return Err(AddressBookError::InvalidInput(format!(
            "expected {} argument(s), got {}",
            N,
            args.len()
        )));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn add_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, phone] = arguments::<2>(args)?;

    match book.find_mut(name) {
        Some(record) => record.add_phone(phone)?,
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone)?;
            book.add_record(record);
        }
    }

    Ok(format!("Contact {} added/updated.", name))
}

fn change_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, old_phone, new_phone] = arguments::<3>(args)?;

    book.find_mut(name)
        .ok_or_else(|| AddressBookError::contact_not_found(name))?
        .edit_phone(old_phone, new_phone)?;

    Ok(format!("Contact {} updated", name))
}

fn show_phone(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    let [name] = arguments::<1>(args)?;

    book.find(name)
        .map(Record::to_string)
        .ok_or_else(|| AddressBookError::contact_not_found(name))
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, birthday] = arguments::<2>(args)?;

    book.find_mut(name)
        .ok_or_else(|| AddressBookError::contact_not_found(name))?
        .add_birthday(birthday)?;

    Ok(format!("Birthday added for {}", name))
}

fn show_birthday(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    let [name] = arguments::<1>(args)?;

    let birthday = book
        .find(name)
        .and_then(Record::birthday)
        .ok_or_else(|| AddressBookError::birthday_not_found(name))?;

    Ok(format!("{}'s birthday is on {}", name, birthday))
}

fn birthdays(book: &AddressBook, ctx: &CommandContext) -> AddressBookResult<String> {
    let upcoming = book.upcoming_birthdays_from(ctx.today, ctx.window_days);
    Ok(format_upcoming_birthdays(&upcoming))
}
