use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};
use common::responses::ProfileView;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /my-profile`: the caller's flashcards and the scores recorded
/// under their username as grader.
pub async fn process(
    req: HttpRequest,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let user = session::require_user(&req, &sessions, &config.database_path).await?;

    let conn = storage::open(&config.database_path)?;
    let flashcards = storage::flashcards::list_for_user(&conn, user.id)?;
    let my_scores = storage::scores::list_for_grader(&conn, &user.username)?;

    Ok(HttpResponse::Ok().json(ProfileView {
        id: user.id,
        username: user.username,
        flashcards,
        my_scores,
    }))
}
