//! Store bootstrap for the binary.
//!
//! A store that cannot be opened is reported on the session's output stream
//! and yields `None`; the caller ends without entering the loop.

use projmark_core::{open_db, SqliteProjectRepository};
use rusqlite::Connection;
use std::io::{self, Write};
use std::path::Path;

/// Opens the store at `path` and checks it is usable by the repository.
pub fn open_store(path: &Path, output: &mut impl Write) -> io::Result<Option<Connection>> {
    let conn = match open_db(path) {
        Ok(conn) => conn,
        Err(err) => {
            writeln!(output, "Error opening database: {err}")?;
            return Ok(None);
        }
    };

    if let Err(err) = SqliteProjectRepository::try_new(&conn) {
        writeln!(output, "Error creating table: {err}")?;
        return Ok(None);
    }

    Ok(Some(conn))
}
