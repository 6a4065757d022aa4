//! Data structures for contacts and the address book.

pub mod book;
pub mod record;

pub use book::{AddressBook, Pages};
pub use record::Record;
