//! Randomized quizzes over another user's deck, with best-score tracking.
//!
//! - `GET /quiz/{u_id}`: sample a fresh quiz from the owner's deck.
//! - `POST /quiz/{u_id}`: submit a result as the signed-in grader; only a
//!   new personal best replaces the stored score.

mod start;
mod submit;

use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/quiz";

/// Number of questions in every quiz.
pub const QUIZ_SIZE: usize = 10;

/// Configures and returns the Actix `Scope` for the quiz routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        web::resource("/{u_id}")
            .route(get().to(start::process))
            .route(post().to(submit::process)),
    )
}
