use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse};
use common::responses::{QuizCard, QuizSheet};
use rand::seq::SliceRandom;
use rusqlite::Connection;

use super::QUIZ_SIZE;
use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /quiz/{u_id}`: sample a fresh quiz over the owner's deck.
pub async fn process(
    req: HttpRequest,
    path: Path<i64>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    session::require_user(&req, &sessions, &config.database_path).await?;

    let conn = storage::open(&config.database_path)?;
    let sheet = build_quiz(&conn, path.into_inner())?;
    Ok(HttpResponse::Ok().json(sheet))
}

/// Draws a uniform sample of [`QUIZ_SIZE`] distinct cards from the
/// owner's deck. Decks smaller than a full quiz are refused instead of
/// panicking.
fn build_quiz(conn: &Connection, owner_id: i64) -> Result<QuizSheet, ApiError> {
    storage::users::find_by_id(conn, owner_id)?.ok_or(ApiError::NotFound("user"))?;

    let deck = storage::flashcards::list_for_user(conn, owner_id)?;
    if deck.len() < QUIZ_SIZE {
        return Err(ApiError::NotEnoughCards(QUIZ_SIZE));
    }

    let cards = deck
        .choose_multiple(&mut rand::thread_rng(), QUIZ_SIZE)
        .map(|card| QuizCard {
            question: card.question.clone(),
            answer: card.answer.clone(),
        })
        .collect();

    Ok(QuizSheet { owner_id, cards })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::storage::{flashcards, test_conn, users};

    fn seed_deck(conn: &Connection, owner_id: i64, size: usize) {
        for i in 0..size {
            flashcards::insert(conn, owner_id, &format!("q{i}"), &format!("a{i}")).unwrap();
        }
    }

    #[test]
    fn a_full_deck_yields_a_permutation_of_itself() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();
        seed_deck(&conn, alice.id, QUIZ_SIZE);

        let sheet = build_quiz(&conn, alice.id).unwrap();
        assert_eq!(sheet.cards.len(), QUIZ_SIZE);

        let drawn: HashSet<(String, String)> = sheet
            .cards
            .into_iter()
            .map(|c| (c.question, c.answer))
            .collect();
        // No repeats, and every pair comes from the deck.
        assert_eq!(drawn.len(), QUIZ_SIZE);
        for i in 0..QUIZ_SIZE {
            assert!(drawn.contains(&(format!("q{i}"), format!("a{i}"))));
        }
    }

    #[test]
    fn a_larger_deck_yields_a_distinct_subset() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();
        seed_deck(&conn, alice.id, 25);

        let sheet = build_quiz(&conn, alice.id).unwrap();
        assert_eq!(sheet.cards.len(), QUIZ_SIZE);

        let deck: HashSet<(String, String)> = flashcards::list_for_user(&conn, alice.id)
            .unwrap()
            .into_iter()
            .map(|c| (c.question, c.answer))
            .collect();
        let drawn: HashSet<(String, String)> = sheet
            .cards
            .into_iter()
            .map(|c| (c.question, c.answer))
            .collect();
        assert_eq!(drawn.len(), QUIZ_SIZE);
        assert!(drawn.is_subset(&deck));
    }

    #[test]
    fn one_card_short_is_refused_not_a_crash() {
        let conn = test_conn();
        let alice = users::insert(&conn, "alice", "d").unwrap();
        seed_deck(&conn, alice.id, QUIZ_SIZE - 1);

        assert!(matches!(
            build_quiz(&conn, alice.id),
            Err(ApiError::NotEnoughCards(n)) if n == QUIZ_SIZE
        ));
    }

    #[test]
    fn an_unknown_owner_is_not_found() {
        let conn = test_conn();
        assert!(matches!(
            build_quiz(&conn, 42),
            Err(ApiError::NotFound("user"))
        ));
    }
}
