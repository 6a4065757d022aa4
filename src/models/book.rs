//! AddressBook model: every record, keyed by contact name.

use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The keyed collection of all records.
///
/// Entries keep their insertion order, and the key of every entry equals
/// its record's name. The book is serialized as a plain sequence of
/// records; keys are rebuilt from the record names on load, so the
/// key/name invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record` under its own name.
    ///
    /// An existing entry under the same name is replaced wholesale; phone
    /// lists are not merged. This overwrite is a deliberate policy, not an
    /// accident of the map API.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by exact name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry under `name`.
    ///
    /// Absent names are silently ignored (deliberate policy).
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    /// Move the record stored under `old` to the name `new`.
    ///
    /// The record keeps its position in iteration order and its name field
    /// is rebuilt, so the key/name invariant is preserved. Never clobbers
    /// an existing contact.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if `old` is absent,
    /// `BookError::NameTaken` if `new` is already in use, or a validation
    /// error if `new` is not a valid contact name.
    pub fn rename_contact(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .records
            .get_index_of(old)
            .ok_or_else(|| BookError::ContactNotFound(old.to_string()))?;
        if self.records.contains_key(new) {
            return Err(BookError::NameTaken(new.to_string()));
        }
        let name = ContactName::new(new)?;

        // All checks passed; the relocation below cannot fail.
        let (_, mut record) = self
            .records
            .shift_remove_index(index)
            .expect("index obtained from get_index_of");
        record.set_name(name);
        self.records
            .shift_insert(index, new.to_string(), record);
        Ok(())
    }

    /// Every record whose name or any phone contains `query` as a literal,
    /// case-sensitive substring.
    ///
    /// A record matching on several fields appears once.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().contains(query)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Split the book into batches of `page_size` records in insertion
    /// order; the final batch may be shorter.
    ///
    /// Every call returns a fresh iterator, so a partially consumed one is
    /// simply dropped and a new call starts over.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize);
        }
        Ok(Pages {
            records: self.records.values().collect(),
            page_size,
            cursor: 0,
        })
    }
}

/// Iterator over fixed-size batches of records.
///
/// Created by [`AddressBook::pages`].
#[derive(Debug)]
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    page_size: usize,
    cursor: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.records.len() {
            return None;
        }
        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = self.records[self.cursor..end].to_vec();
        self.cursor = end;
        Some(page)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .values()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", lines)
    }
}

// Serde support - serialize as a sequence of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild the name keys from the records themselves
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
