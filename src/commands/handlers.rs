//! Command handlers.
//!
//! Each handler maps its arguments and the address book to a display
//! string, or to a [`CommandError`] whose text is shown instead. Handlers
//! never persist; the router snapshots after successful mutations.

use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

pub const HELP_TEXT: &str = "Available commands:
  hello                           - Greet the assistant
  add <name> <phone>              - Add a new contact (replaces an existing one)
  change <name> <new_phone>       - Replace the phones of an existing contact
  phone <name>                    - Show the phones of a contact
  all                             - Show all contacts
  add_birthday <name> <birthday>  - Add a birthday to a contact (DD.MM.YYYY)
  show_birthday <name>            - Show the birthday of a contact
  birthdays                       - Show birthdays within the next 7 days
  delete <name>                   - Delete a contact
  help                            - Show this list
  exit | close                    - Exit the program";

fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::NotEnoughArguments)
}

fn existing<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn existing_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create or replace a contact with a single phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <new_phone>`: replace the contact's phones with one phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let new_phone = arg(args, 1)?;

    existing_mut(book, name)?.set_phone(new_phone)?;
    Ok(format!("Contact {} updated.", name))
}

/// `phone <name>`: render the contact.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    Ok(existing(book, name)?.to_string())
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add_birthday <name> <DD.MM.YYYY>`: attach a birthday.
///
/// The date is validated before the contact is looked up.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let birthday = Birthday::new(arg(args, 1)?)?;

    existing_mut(book, name)?.add_birthday(birthday);
    Ok(format!("Birthday added for {}.", name))
}

/// `show_birthday <name>`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let message = match existing(book, name)?.show_birthday() {
        Some(birthday) => format!("{}'s birthday is on {}.", name, birthday),
        None => format!("{} does not have a birthday recorded.", name),
    };
    Ok(message)
}

/// `birthdays`: contacts with a birthday in the window starting `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays_from(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    format!("Upcoming birthdays:\n{}", lines.join("\n"))
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    book.delete(name)
        .map(|_| format!("Contact {} deleted.", name))
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
