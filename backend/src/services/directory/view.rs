use actix_web::web::{Data, Path};
use actix_web::{HttpRequest, HttpResponse};
use common::responses::PublicProfile;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /users/{u_id}`: another user's flashcards and the scores graders
/// have posted against their quizzes.
pub async fn process(
    req: HttpRequest,
    path: Path<i64>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    session::require_user(&req, &sessions, &config.database_path).await?;

    let conn = storage::open(&config.database_path)?;
    let target = storage::users::find_by_id(&conn, path.into_inner())?
        .ok_or(ApiError::NotFound("user"))?;

    let flashcards = storage::flashcards::list_for_user(&conn, target.id)?;
    let scores = storage::scores::list_for_owner(&conn, target.id)?;

    Ok(HttpResponse::Ok().json(PublicProfile {
        user_id: target.id,
        username: target.username,
        flashcards,
        scores,
    }))
}
