//! Account lifecycle: signup, login, logout.
//!
//! The routes live at the application root rather than under an area
//! prefix:
//! - `GET /signup` / `POST /signup`: render the form / create an account
//!   and open a session for it.
//! - `GET /login` / `POST /login`: render the form / authenticate.
//! - `GET /logout`: revoke the session; safe to repeat.
//!
//! Already-authenticated visitors are redirected to `/my-profile` from
//! both forms without re-authenticating.

mod login;
mod logout;
pub(crate) mod password;
mod signup;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::web::{self, ServiceConfig};
use actix_web::HttpResponse;

use crate::session::SESSION_COOKIE;

/// Registers the account routes on the application.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/signup")
            .route(web::get().to(signup::form))
            .route(web::post().to(signup::process)),
    )
    .service(
        web::resource("/login")
            .route(web::get().to(login::form))
            .route(web::post().to(login::process)),
    )
    .route("/logout", web::get().to(logout::process));
}

/// Redirect to the profile with the session cookie set.
fn open_session_redirect(token: String) -> HttpResponse {
    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/my-profile"))
        .cookie(cookie)
        .finish()
}
