use serde::Deserialize;

/// Form payload shared by the signup and login endpoints.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Form payload for creating a flashcard from the profile page.
#[derive(Debug, Deserialize)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
}

/// JSON body of a quiz score submission.
#[derive(Debug, Deserialize)]
pub struct ScoreSubmission {
    pub score: i64,
}
