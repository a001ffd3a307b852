//! Session-bound identity resolution.
//!
//! The client holds an opaque token in an HttpOnly cookie; the token maps
//! to a user id in the shared [`state::SessionsState`]. Handlers receive
//! the resolved [`User`] explicitly instead of reading an ambient
//! current-user value.

pub mod state;

use actix_web::HttpRequest;
use common::model::user::User;

use crate::error::ApiError;
use crate::storage;
use self::state::SessionsState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Resolve the request's session cookie to a user, if any.
///
/// A missing cookie, an unknown token, and a token whose user row has
/// vanished all resolve to `None`.
pub async fn current_user(
    req: &HttpRequest,
    sessions: &SessionsState,
    db_path: &str,
) -> Result<Option<User>, ApiError> {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Some(user_id) = sessions.resolve(cookie.value()).await else {
        return Ok(None);
    };
    let conn = storage::open(db_path)?;
    Ok(storage::users::find_by_id(&conn, user_id)?)
}

/// Like [`current_user`], but unauthenticated requests are an error.
pub async fn require_user(
    req: &HttpRequest,
    sessions: &SessionsState,
    db_path: &str,
) -> Result<User, ApiError> {
    current_user(req, sessions, db_path)
        .await?
        .ok_or(ApiError::Unauthorized)
}
