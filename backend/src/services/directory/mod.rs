//! Read-only browsing of other users, their decks and their scores.
//!
//! POST is accepted as an alias of GET on both paths, matching the
//! original route registrations.

mod list;
mod view;

use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/users";

/// Configures and returns the Actix `Scope` for the directory routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            web::resource("")
                .route(get().to(list::process))
                .route(post().to(list::process)),
        )
        .service(
            web::resource("/{u_id}")
                .route(get().to(view::process))
                .route(post().to(view::process)),
        )
}
