//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and birthdays. These value objects validate at construction time and are
//! immutable afterwards, so invalid data can never be represented in the
//! system. "Editing" a field means replacing it with a newly constructed,
//! validated value.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
