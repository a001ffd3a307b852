use serde::Serialize;

use crate::model::flashcard::Flashcard;
use crate::model::score::{Score, ScoreOutcome};

/// The signed-in user's own page: their cards plus the scores they have
/// earned grading other people's quizzes.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: i64,
    pub username: String,
    pub flashcards: Vec<Flashcard>,
    pub my_scores: Vec<Score>,
}

/// Directory entry for the user listing.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

/// Another user's public page: their cards and the best scores graders
/// have posted against them.
#[derive(Debug, Serialize)]
pub struct PublicProfile {
    pub user_id: i64,
    pub username: String,
    pub flashcards: Vec<Flashcard>,
    pub scores: Vec<Score>,
}

/// One question of a freshly sampled quiz.
#[derive(Debug, Serialize)]
pub struct QuizCard {
    pub question: String,
    pub answer: String,
}

/// A quiz drawn from one owner's deck.
#[derive(Debug, Serialize)]
pub struct QuizSheet {
    pub owner_id: i64,
    pub cards: Vec<QuizCard>,
}

/// Result of a score submission, with the user-facing notice.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub outcome: ScoreOutcome,
    pub message: &'static str,
}
