//! Contact Book - main entry point.
//!
//! Wires configuration, storage and the interactive session together.

use anyhow::Result;
use contact_book::{AddressBook, Config, ContactStore, Session};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Diagnostics go to stderr; stdout belongs to the conversation.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path, "starting contact book");

    let store = ContactStore::new(&config.book_path);
    let book = match store.load() {
        Ok(book) => {
            info!(contacts = book.len(), "address book loaded");
            book
        }
        Err(error) => {
            warn!(%error, "could not load address book, starting empty");
            AddressBook::new()
        }
    };

    let stdin = io::stdin();
    let session = Session::new(book, store, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}
