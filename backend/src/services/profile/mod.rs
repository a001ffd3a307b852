//! The signed-in user's own profile.
//!
//! - `GET /my-profile`: the caller's flashcards plus the scores they have
//!   earned grading other users' quizzes.
//! - `POST /my-profile`: create a flashcard.
//! - `POST /my-profile/remove/{fs_id}`: delete one of the caller's own
//!   flashcards.

mod add_card;
mod remove_card;
mod view;

use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/my-profile";

/// Configures and returns the Actix `Scope` for the profile routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            web::resource("")
                .route(get().to(view::process))
                .route(post().to(add_card::process)),
        )
        .route("/remove/{fs_id}", post().to(remove_card::process))
}
