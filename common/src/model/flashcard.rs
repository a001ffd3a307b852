use chrono::{DateTime, Utc};
use serde::Serialize;

/// Upper bound on question and answer length, mirrored by the schema.
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, Serialize)]
pub struct Flashcard {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}
