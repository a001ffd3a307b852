use actix_web::web::{Data, Json, Path};
use actix_web::{HttpRequest, HttpResponse};
use common::requests::ScoreSubmission;
use common::responses::ScoreReport;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `POST /quiz/{u_id}` with a JSON `{"score": n}` body: record the
/// grader's result against the owner's deck.
pub async fn process(
    req: HttpRequest,
    path: Path<i64>,
    payload: Json<ScoreSubmission>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let grader = session::require_user(&req, &sessions, &config.database_path).await?;

    let owner_id = path.into_inner();
    let mut conn = storage::open(&config.database_path)?;
    storage::users::find_by_id(&conn, owner_id)?.ok_or(ApiError::NotFound("user"))?;

    let outcome =
        storage::scores::submit_best(&mut conn, owner_id, &grader.username, payload.score)?;

    Ok(HttpResponse::Ok().json(ScoreReport {
        outcome,
        message: outcome.message(),
    }))
}
