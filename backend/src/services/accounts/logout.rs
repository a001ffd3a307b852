use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};

use crate::session::state::SessionsState;
use crate::session::SESSION_COOKIE;

/// `GET /logout`: revoke the live session, if any, and expire the cookie.
/// Repeating the call without a session is not an error.
pub async fn process(req: HttpRequest, sessions: Data<SessionsState>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        sessions.close(cookie.value()).await;
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(removal)
        .finish()
}
