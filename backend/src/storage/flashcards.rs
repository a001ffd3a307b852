use chrono::Utc;
use common::model::flashcard::Flashcard;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn row_to_card(row: &Row) -> Result<Flashcard, rusqlite::Error> {
    Ok(Flashcard {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        created_at: row.get(3)?,
        user_id: row.get(4)?,
    })
}

pub fn insert(
    conn: &Connection,
    user_id: i64,
    question: &str,
    answer: &str,
) -> Result<Flashcard, rusqlite::Error> {
    let created_at = Utc::now();
    conn.execute(
        "INSERT INTO flashcards (question, answer, created_at, user_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![question, answer, created_at, user_id],
    )?;
    Ok(Flashcard {
        id: conn.last_insert_rowid(),
        question: question.to_string(),
        answer: answer.to_string(),
        created_at,
        user_id,
    })
}

/// All cards owned by `user_id`, in insertion order.
pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Flashcard>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT id, question, answer, created_at, user_id
         FROM flashcards WHERE user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![user_id], row_to_card)?;
    rows.collect()
}

pub fn find(conn: &Connection, id: i64) -> Result<Option<Flashcard>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, question, answer, created_at, user_id FROM flashcards WHERE id = ?1",
        params![id],
        row_to_card,
    )
    .optional()
}

/// Delete by id; returns whether a row existed.
pub fn delete(conn: &Connection, id: i64) -> Result<bool, rusqlite::Error> {
    let removed = conn.execute("DELETE FROM flashcards WHERE id = ?1", params![id])?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{test_conn, users};

    #[test]
    fn listing_is_scoped_to_the_owner() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();
        let bob = users::insert(&conn, "bob", "d").unwrap();

        insert(&conn, alice.id, "q1", "a1").unwrap();
        insert(&conn, alice.id, "q2", "a2").unwrap();
        insert(&conn, bob.id, "q3", "a3").unwrap();

        let cards = list_for_user(&conn, alice.id).unwrap();
        let questions: Vec<&str> = cards.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["q1", "q2"]);

        assert_eq!(list_for_user(&conn, bob.id).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_cards_are_allowed() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();

        insert(&conn, alice.id, "q", "a").unwrap();
        insert(&conn, alice.id, "q", "a").unwrap();

        assert_eq!(list_for_user(&conn, alice.id).unwrap().len(), 2);
    }

    #[test]
    fn delete_removes_the_card_from_its_owner_listing() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();
        let card = insert(&conn, alice.id, "q", "a").unwrap();

        assert!(delete(&conn, card.id).unwrap());
        assert!(list_for_user(&conn, alice.id).unwrap().is_empty());
        assert!(find(&conn, card.id).unwrap().is_none());

        // Deleting again reports that nothing was there.
        assert!(!delete(&conn, card.id).unwrap());
    }
}
