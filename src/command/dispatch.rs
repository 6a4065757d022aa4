//! Command execution against the address book.
//!
//! Every operation is a plain function over the book, independently
//! testable; [`execute`] maps a parsed [`Command`] to its operation and
//! reports what happened.

use crate::command::parser::{help_text, Command};
use crate::domain::ContactName;
use crate::error::{BookError, CommandResult};
use crate::models::{AddressBook, Record};

/// What a dispatched command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A reply to print. `mutated` marks commands that changed the book
    /// and therefore require a save.
    Reply { message: String, mutated: bool },

    /// Print the farewell, save and terminate the session.
    Exit { message: String },
}

impl Outcome {
    fn reply(message: impl Into<String>) -> Self {
        Self::Reply {
            message: message.into(),
            mutated: false,
        }
    }

    fn mutation(message: impl Into<String>) -> Self {
        Self::Reply {
            message: message.into(),
            mutated: true,
        }
    }
}

/// Run `command` against `book`.
///
/// # Errors
///
/// Any `BookError` (including field validation) raised by the operation.
/// A failed command leaves the book unchanged.
pub fn execute(book: &mut AddressBook, command: Command) -> CommandResult<Outcome> {
    match command {
        Command::Hello => Ok(Outcome::reply(help_text())),
        Command::Add { name, phone } => add_phone(book, &name, &phone),
        Command::Birthday { name, date } => set_birthday(book, &name, &date),
        Command::When { name } => days_to_birthday(book, &name),
        Command::Rename { old, new } => rename_contact(book, &old, &new),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::Search { query } => search(book, &query),
        Command::ShowAll => show_all(book),
        Command::Exit => Ok(Outcome::Exit {
            message: "Good bye!".to_string(),
        }),
    }
}

/// `add`: append a phone, creating the contact on first sight.
///
/// An existing contact gains another phone; a duplicate entry is never
/// created. When the contact is new, the phone is validated before the
/// record is inserted, so a bad phone does not leave an empty contact
/// behind.
fn add_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<Outcome> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Outcome::mutation("Ok"));
    }
    let mut record = Record::new(ContactName::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Outcome::mutation("Ok"))
}

/// `birthday`: set or replace a contact's birthday.
fn set_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<Outcome> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok(Outcome::mutation("Ok"))
}

/// `when`: days until a contact's next birthday.
fn days_to_birthday(book: &AddressBook, name: &str) -> CommandResult<Outcome> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    let message = match record.days_to_next_birthday() {
        None => format!("{} has no birthday set", name),
        Some(0) => format!("{}'s birthday is today!", name),
        Some(days) => format!("{} day(s) until {}'s next birthday", days, name),
    };
    Ok(Outcome::reply(message))
}

/// `rename`: move a contact to a new name.
fn rename_contact(book: &mut AddressBook, old: &str, new: &str) -> CommandResult<Outcome> {
    book.rename_contact(old, new)?;
    Ok(Outcome::mutation(format!("Renamed '{}' to '{}'", old, new)))
}

/// `change`: replace one of a contact's phones.
fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<Outcome> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok(Outcome::mutation("Ok"))
}

/// `phone`: show one contact's line.
fn show_phone(book: &AddressBook, name: &str) -> CommandResult<Outcome> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    Ok(Outcome::reply(record.to_string()))
}

/// `search`: contacts whose name or phones contain the query.
fn search(book: &AddressBook, query: &str) -> CommandResult<Outcome> {
    let matches = book.search(query);
    if matches.is_empty() {
        return Ok(Outcome::reply(format!("No contacts match '{}'", query)));
    }
    let lines = matches
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Outcome::reply(lines))
}

/// `show all`: the whole book, one contact per line.
fn show_all(book: &AddressBook) -> CommandResult<Outcome> {
    if book.is_empty() {
        return Ok(Outcome::reply("The address book is empty"));
    }
    Ok(Outcome::reply(book.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parser::parse;
    use crate::domain::ValidationError;
    use crate::error::CommandError;

    fn run(book: &mut AddressBook, line: &str) -> CommandResult<Outcome> {
        execute(book, parse(line).unwrap())
    }

    fn message(outcome: Outcome) -> String {
        match outcome {
            Outcome::Reply { message, .. } => message,
            Outcome::Exit { message } => message,
        }
    }

    #[test]
    fn test_add_creates_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        let record = book.find("Alice").unwrap();
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_add_appends_to_existing_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        run(&mut book, "add Alice 0987654321").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "add Alice 123").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_is_mutating() {
        let mut book = AddressBook::new();
        let outcome = run(&mut book, "add Alice 1234567890").unwrap();
        assert_eq!(
            outcome,
            Outcome::Reply {
                message: "Ok".to_string(),
                mutated: true,
            }
        );
    }

    #[test]
    fn test_birthday_requires_existing_contact() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "birthday Alice 2000-01-01").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_birthday_sets_date() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        run(&mut book, "birthday Alice 2000-01-01").unwrap();
        assert_eq!(
            book.find("Alice").unwrap().birthday().unwrap().to_string(),
            "2000-01-01"
        );
    }

    #[test]
    fn test_when_without_birthday() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        let outcome = run(&mut book, "when Alice").unwrap();
        assert_eq!(message(outcome), "Alice has no birthday set");
    }

    #[test]
    fn test_when_missing_contact() {
        let mut book = AddressBook::new();
        assert!(run(&mut book, "when Alice").is_err());
    }

    #[test]
    fn test_change_atomicity() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111").unwrap();
        let err = run(&mut book, "change Alice 1111111111 bad").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Book(BookError::Validation(_))
        ));
        let phones = book.find("Alice").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "1111111111");
    }

    #[test]
    fn test_change_replaces_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111").unwrap();
        run(&mut book, "change Alice 1111111111 2222222222").unwrap();
        let phones = book.find("Alice").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "2222222222");
    }

    #[test]
    fn test_phone_renders_record_line() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        run(&mut book, "birthday Alice 2000-01-01").unwrap();
        let outcome = run(&mut book, "phone Alice").unwrap();
        let line = message(outcome);
        assert!(line.contains("Alice"));
        assert!(line.contains("2000-01-01"));
        assert!(line.contains("1234567890"));
    }

    #[test]
    fn test_rename_conflict_keeps_book_unchanged() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111").unwrap();
        run(&mut book, "add Bob 2222222222").unwrap();
        let err = run(&mut book, "rename Alice Bob").unwrap_err();
        assert!(matches!(err, CommandError::Book(BookError::NameTaken(_))));
        assert_eq!(book.find("Alice").unwrap().phones()[0].as_str(), "1111111111");
        assert_eq!(book.find("Bob").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_rename_moves_record() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1111111111").unwrap();
        let outcome = run(&mut book, "rename Alice Alicia").unwrap();
        assert_eq!(message(outcome), "Renamed 'Alice' to 'Alicia'");
        assert!(book.find("Alice").is_none());
        assert!(book.find("Alicia").is_some());
    }

    #[test]
    fn test_search_no_match_message() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        let outcome = run(&mut book, "search zzz").unwrap();
        assert_eq!(message(outcome), "No contacts match 'zzz'");
    }

    #[test]
    fn test_search_lists_matches() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 5555555555").unwrap();
        run(&mut book, "add Bob 1234567890").unwrap();
        let outcome = run(&mut book, "search 55").unwrap();
        let text = message(outcome);
        assert!(text.contains("Alice"));
        assert!(!text.contains("Bob"));
    }

    #[test]
    fn test_show_all_empty_book() {
        let mut book = AddressBook::new();
        let outcome = run(&mut book, "show all").unwrap();
        assert_eq!(message(outcome), "The address book is empty");
    }

    #[test]
    fn test_show_all_lists_contacts() {
        let mut book = AddressBook::new();
        run(&mut book, "add Alice 1234567890").unwrap();
        run(&mut book, "add Bob 0987654321").unwrap();
        let outcome = run(&mut book, "show all").unwrap();
        let text = message(outcome);
        assert!(text.contains("Alice"));
        assert!(text.contains("Bob"));
    }

    #[test]
    fn test_exit_outcome() {
        let mut book = AddressBook::new();
        let outcome = run(&mut book, "good by").unwrap();
        assert_eq!(
            outcome,
            Outcome::Exit {
                message: "Good bye!".to_string()
            }
        );
    }

    #[test]
    fn test_hello_shows_help() {
        let mut book = AddressBook::new();
        let outcome = run(&mut book, "hello").unwrap();
        assert!(message(outcome).contains("add <name> <phone>"));
    }
}
