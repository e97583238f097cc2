//! SQLite-backed persistence for the address book.
//!
//! The book lives in memory for the whole session. It is read once with
//! [`load`] when the session starts and written back with [`save`] when it
//! ends. Each call opens its own connection and drops it before returning.

pub mod schema;
pub mod record_repo;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::error::{BookError, BookResult};
use crate::model::AddressBook;

/// Load the book stored at `path`.
///
/// Never fails: a missing, unreadable or corrupt file yields an empty book.
pub fn load(path: &Path) -> AddressBook {
    if !path.exists() {
        info!(path = %path.display(), "no saved address book, starting empty");
        return AddressBook::new();
    }

    match Connection::open(path)
        .map_err(BookError::from)
        .and_then(|conn| read_book(&conn))
    {
        Ok(book) => {
            info!(path = %path.display(), records = book.len(), "address book loaded");
            book
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read address book, starting empty");
            AddressBook::new()
        }
    }
}

/// Write `book` to `path`, replacing whatever was stored there.
///
/// The book is written to a sibling temporary file which is then renamed
/// over `path`, so an unreadable old file is replaced rather than reopened.
pub fn save(book: &AddressBook, path: &Path) -> BookResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let tmp = temp_path(path);
    if tmp.exists() {
        std::fs::remove_file(&tmp)?;
    }

    let written = Connection::open(&tmp)
        .map_err(BookError::from)
        .and_then(|mut conn| write_book(&mut conn, book))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(BookError::from));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read every record from an open connection.
pub fn read_book(conn: &Connection) -> BookResult<AddressBook> {
    schema::initialize(conn)?;
    let mut book = AddressBook::new();
    for record in record_repo::find_all(conn)? {
        book.add_record(record);
    }
    Ok(book)
}

/// Replace the stored records with `book` in a single transaction.
pub fn write_book(conn: &mut Connection, book: &AddressBook) -> BookResult<()> {
    schema::initialize(conn)?;
    let tx = conn.transaction()?;
    record_repo::delete_all(&tx)?;
    for (position, record) in book.iter().enumerate() {
        record_repo::insert(&tx, position, record)?;
    }
    tx.commit()?;
    debug!(records = book.len(), "records written");
    Ok(())
}
