use actix_web::web::{Data, Form};
use actix_web::{HttpRequest, HttpResponse};
use common::model::flashcard::{Flashcard, MAX_TEXT_LEN};
use common::requests::NewFlashcard;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `POST /my-profile`: create a flashcard owned by the caller.
pub async fn process(
    req: HttpRequest,
    form: Form<NewFlashcard>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let user = session::require_user(&req, &sessions, &config.database_path).await?;

    let card = create_card(&config.database_path, user.id, &form.question, &form.answer)?;
    Ok(HttpResponse::Created().json(card))
}

/// Validates both sides of the card and inserts it. Duplicate cards are
/// allowed.
fn create_card(
    db_path: &str,
    user_id: i64,
    question: &str,
    answer: &str,
) -> Result<Flashcard, ApiError> {
    for (field, value) in [("question", question), ("answer", answer)] {
        if value.is_empty() {
            return Err(ApiError::Validation(format!("{field} cannot be blank")));
        }
        if value.len() > MAX_TEXT_LEN {
            return Err(ApiError::Validation(format!(
                "{field} must be at most {MAX_TEXT_LEN} characters"
            )));
        }
    }

    let conn = storage::open(db_path)?;
    Ok(storage::flashcards::insert(&conn, user_id, question, answer)?)
}
