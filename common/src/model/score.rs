use chrono::{DateTime, Utc};
use serde::Serialize;

/// Best quiz result one grader holds against one owner's deck.
#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub id: i64,
    pub score: i64,
    /// Time of the last improvement, not of the first attempt.
    pub scored_at: DateTime<Utc>,
    /// Username of the grader who took the quiz, not the deck owner.
    pub belongs: String,
    /// The deck owner whose cards were quizzed.
    pub user_id: i64,
}

/// What a score submission did to the stored best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOutcome {
    Created,
    Improved,
    Unchanged,
}

impl ScoreOutcome {
    /// User-facing notice matching the outcome.
    pub fn message(self) -> &'static str {
        match self {
            ScoreOutcome::Created => "New score added!",
            ScoreOutcome::Improved => "Score updated! New best!",
            ScoreOutcome::Unchanged => "Not your best attempt. Try harder!",
        }
    }
}
