use chrono::Utc;
use common::model::score::{Score, ScoreOutcome};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

fn row_to_score(row: &Row) -> Result<Score, rusqlite::Error> {
    Ok(Score {
        id: row.get(0)?,
        score: row.get(1)?,
        scored_at: row.get(2)?,
        belongs: row.get(3)?,
        user_id: row.get(4)?,
    })
}

/// Record a quiz result, keeping only the best score per (owner, grader)
/// pair.
///
/// The lookup and the write run inside one immediate transaction, so two
/// concurrent submissions cannot both observe "no row" and insert twice;
/// the UNIQUE (user_id, belongs) constraint backstops the invariant. Only
/// a strictly greater score replaces the stored one.
pub fn submit_best(
    conn: &mut Connection,
    owner_id: i64,
    grader: &str,
    value: i64,
) -> Result<ScoreOutcome, rusqlite::Error> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing: Option<i64> = tx
        .query_row(
            "SELECT score FROM scores WHERE user_id = ?1 AND belongs = ?2",
            params![owner_id, grader],
            |row| row.get(0),
        )
        .optional()?;

    let outcome = match existing {
        None => {
            tx.execute(
                "INSERT INTO scores (score, scored_at, belongs, user_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![value, Utc::now(), grader, owner_id],
            )?;
            ScoreOutcome::Created
        }
        Some(best) if value > best => {
            tx.execute(
                "UPDATE scores SET score = ?1, scored_at = ?2
                 WHERE user_id = ?3 AND belongs = ?4",
                params![value, Utc::now(), owner_id, grader],
            )?;
            ScoreOutcome::Improved
        }
        Some(_) => ScoreOutcome::Unchanged,
    };

    tx.commit()?;
    Ok(outcome)
}

/// Scores posted against `owner_id`'s quizzes, for the public profile.
pub fn list_for_owner(conn: &Connection, owner_id: i64) -> Result<Vec<Score>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT id, score, scored_at, belongs, user_id
         FROM scores WHERE user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![owner_id], row_to_score)?;
    rows.collect()
}

/// Scores `username` earned grading other people's quizzes, for the own
/// profile page.
pub fn list_for_grader(conn: &Connection, username: &str) -> Result<Vec<Score>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT id, score, scored_at, belongs, user_id
         FROM scores WHERE belongs = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![username], row_to_score)?;
    rows.collect()
}
