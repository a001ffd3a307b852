//! rusqlite repository layer.
//!
//! Plain data structs from `common` go in and out; nothing above this
//! module speaks SQL. A connection is opened per operation against the
//! configured database path, and the schema is created once at startup.

pub mod flashcards;
pub mod scores;
pub mod users;

use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS flashcards (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    created_at TEXT NOT NULL,
    user_id    INTEGER NOT NULL REFERENCES users (id)
);
CREATE TABLE IF NOT EXISTS scores (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    score     INTEGER NOT NULL,
    scored_at TEXT NOT NULL,
    belongs   TEXT NOT NULL,
    user_id   INTEGER NOT NULL REFERENCES users (id),
    UNIQUE (user_id, belongs)
);
";

pub fn open(path: &str) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// Create the schema if it does not exist yet. Called once at startup.
pub fn init(path: &str) -> Result<(), rusqlite::Error> {
    open(path)?.execute_batch(SCHEMA)
}

/// True when `err` is a UNIQUE (or other) constraint violation, which the
/// callers map to their domain conflict errors.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
pub(crate) fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn
}
