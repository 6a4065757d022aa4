//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers and an
/// optional birthday.
///
/// The name is the record's identity. It only changes through
/// [`AddressBook::rename_contact`](crate::models::AddressBook::rename_contact),
/// which keeps the book key and the record name in sync. Phones keep their
/// insertion order and may repeat; nothing deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    // Only the address book rename path may call this; the book key must
    // stay equal to the record name.
    pub(crate) fn set_name(&mut self, name: ContactName) {
        self.name = name;
    }

    /// Validate `raw` as a phone number and append it.
    ///
    /// Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(raw.to_string())),
        }
    }

    /// The first phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Replace the phone `old` with `new`.
    ///
    /// `new` is validated before `old` is removed, so a failed edit leaves
    /// the phone list exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is absent, or a
    /// validation error if `new` is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        let replacement = PhoneNumber::new(new)?;
        self.remove_phone(old)?;
        self.phones.push(replacement);
        Ok(())
    }

    /// Validate `raw` as a birthday and set it, replacing any previous
    /// value.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days from the current local date to the next occurrence of the
    /// contact's birthday.
    ///
    /// `None` when no birthday is set; 0 when the birthday is today.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Deterministic variant of [`Record::days_to_next_birthday`] counting
    /// from an explicit date.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until_next(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        match &self.birthday {
            Some(birthday) => write!(
                f,
                "Contact name: {}, birthday: {}, phones: {}",
                self.name, birthday, phones
            ),
            None => write!(f, "Contact name: {}, phones: {}", self.name, phones),
        }
    }
}
