use common::model::user::User;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
    })
}

/// Insert a new user. A duplicate username surfaces as a constraint
/// violation from the UNIQUE column; callers map it to their conflict
/// error.
pub fn insert(
    conn: &Connection,
    username: &str,
    password_hash: &str,
) -> Result<User, rusqlite::Error> {
    conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
        params![username, password_hash],
    )?;
    Ok(User {
        id: conn.last_insert_rowid(),
        username: username.to_string(),
        password_hash: password_hash.to_string(),
    })
}

/// Exact, case-sensitive username lookup.
pub fn find_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<User>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, username, password_hash FROM users WHERE username = ?1",
        params![username],
        row_to_user,
    )
    .optional()
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<User>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, username, password_hash FROM users WHERE id = ?1",
        params![id],
        row_to_user,
    )
    .optional()
}

/// Every user except `excluded_id`, for the directory listing.
pub fn list_except(conn: &Connection, excluded_id: i64) -> Result<Vec<User>, rusqlite::Error> {
    let mut stmt =
        conn.prepare("SELECT id, username, password_hash FROM users WHERE id != ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![excluded_id], row_to_user)?;
    rows.collect()
}
