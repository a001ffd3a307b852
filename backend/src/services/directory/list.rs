use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};
use common::responses::UserSummary;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /users`: every user except the caller, as id/username pairs.
pub async fn process(
    req: HttpRequest,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let user = session::require_user(&req, &sessions, &config.database_path).await?;

    let conn = storage::open(&config.database_path)?;
    let listing: Vec<UserSummary> = storage::users::list_except(&conn, user.id)?
        .into_iter()
        .map(|u| UserSummary {
            id: u.id,
            username: u.username,
        })
        .collect();

    Ok(HttpResponse::Ok().json(listing))
}
