use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse};

use crate::config::Config;
use crate::error::ApiError;
use crate::services::see_other;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `POST /my-profile/remove/{fs_id}`: delete one of the caller's own
/// flashcards.
pub async fn process(
    req: HttpRequest,
    path: Path<i64>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let user = session::require_user(&req, &sessions, &config.database_path).await?;

    remove_card(&config.database_path, path.into_inner(), user.id)?;
    Ok(see_other("/my-profile"))
}

/// Deletes the card after checking it belongs to the requester. Cards
/// owned by someone else are refused.
fn remove_card(db_path: &str, fs_id: i64, requester_id: i64) -> Result<(), ApiError> {
    let conn = storage::open(db_path)?;
    let card = storage::flashcards::find(&conn, fs_id)?.ok_or(ApiError::NotFound("flashcard"))?;
    if card.user_id != requester_id {
        return Err(ApiError::Forbidden);
    }
    storage::flashcards::delete(&conn, fs_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db_with_two_users() -> (tempfile::TempDir, String, i64, i64) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite").to_str().unwrap().to_string();
        storage::init(&path).unwrap();

        let conn = storage::open(&path).unwrap();
        let alice = storage::users::insert(&conn, "alice", "d").unwrap();
        let bob = storage::users::insert(&conn, "bob", "d").unwrap();
        (dir, path, alice.id, bob.id)
    }

    #[test]
    fn the_owner_can_remove_their_card() {
        let (_dir, db, alice, _bob) = test_db_with_two_users();
        let conn = storage::open(&db).unwrap();
        let card = storage::flashcards::insert(&conn, alice, "q", "a").unwrap();

        remove_card(&db, card.id, alice).unwrap();
        assert!(storage::flashcards::find(&conn, card.id).unwrap().is_none());
    }

    #[test]
    fn someone_elses_card_is_refused() {
        let (_dir, db, alice, bob) = test_db_with_two_users();
        let conn = storage::open(&db).unwrap();
        let card = storage::flashcards::insert(&conn, alice, "q", "a").unwrap();

        assert!(matches!(
            remove_card(&db, card.id, bob),
            Err(ApiError::Forbidden)
        ));
        // The card must survive the refused attempt.
        assert!(storage::flashcards::find(&conn, card.id).unwrap().is_some());
    }

    #[test]
    fn a_missing_card_is_not_found() {
        let (_dir, db, alice, _bob) = test_db_with_two_users();
        assert!(matches!(
            remove_card(&db, 999, alice),
            Err(ApiError::NotFound("flashcard"))
        ));
    }
}
