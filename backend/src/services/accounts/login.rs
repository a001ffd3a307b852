use actix_web::web::{Data, Form};
use actix_web::{HttpRequest, HttpResponse};
use common::model::user::User;
use common::requests::Credentials;
use log::info;

use super::password;
use crate::config::Config;
use crate::error::ApiError;
use crate::pages;
use crate::services::see_other;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /login`: the login form, or straight to the profile when a
/// session is already live.
pub async fn form(
    req: HttpRequest,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if session::current_user(&req, &sessions, &config.database_path)
        .await?
        .is_some()
    {
        return Ok(see_other("/my-profile"));
    }
    Ok(pages::serve("login.html"))
}

/// `POST /login`: authenticate and open a session.
pub async fn process(
    req: HttpRequest,
    form: Form<Credentials>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if session::current_user(&req, &sessions, &config.database_path)
        .await?
        .is_some()
    {
        return Ok(see_other("/my-profile"));
    }

    let user = authenticate(&config.database_path, &form.username, &form.password)?;
    info!("login: {}", user.username);

    let token = sessions.open(user.id).await;
    Ok(super::open_session_redirect(token))
}

/// Checks the submitted credentials against the stored digest. Unknown
/// usernames and wrong passwords produce the same error.
fn authenticate(db_path: &str, username: &str, password: &str) -> Result<User, ApiError> {
    let conn = storage::open(db_path)?;
    let user = storage::users::find_by_username(&conn, username)?
        .ok_or(ApiError::InvalidCredentials)?;
    if !password::verify(password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }
    Ok(user)
}
