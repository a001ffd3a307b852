use actix_web::web::{Data, Form};
use actix_web::{HttpRequest, HttpResponse};
use common::model::user::{User, MAX_USERNAME_LEN};
use common::requests::Credentials;
use log::info;

use super::password;
use crate::config::Config;
use crate::error::ApiError;
use crate::pages;
use crate::services::see_other;
use crate::session::{self, state::SessionsState};
use crate::storage;

/// `GET /signup`: the signup form, or straight to the profile when a
/// session is already live.
pub async fn form(
    req: HttpRequest,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if session::current_user(&req, &sessions, &config.database_path)
        .await?
        .is_some()
    {
        return Ok(see_other("/my-profile"));
    }
    Ok(pages::serve("signup.html"))
}

/// `POST /signup`: create the account and open a session for it.
pub async fn process(
    req: HttpRequest,
    form: Form<Credentials>,
    sessions: Data<SessionsState>,
    config: Data<Config>,
) -> Result<HttpResponse, ApiError> {
    if session::current_user(&req, &sessions, &config.database_path)
        .await?
        .is_some()
    {
        return Ok(see_other("/my-profile"));
    }

    let user = register(&config.database_path, &form.username, &form.password)?;
    info!("new account: {}", user.username);

    let token = sessions.open(user.id).await;
    Ok(super::open_session_redirect(token))
}

/// Validates the credentials and inserts the user row. The UNIQUE column
/// on usernames decides conflicts, so two concurrent signups for one name
/// cannot both succeed.
fn register(db_path: &str, username: &str, password: &str) -> Result<User, ApiError> {
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "username and password cannot be blank".to_string(),
        ));
    }
    if username.len() > MAX_USERNAME_LEN {
        return Err(ApiError::Validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }

    let password_hash = password::hash(password)?;
    let conn = storage::open(db_path)?;
    storage::users::insert(&conn, username, &password_hash).map_err(|err| {
        if storage::is_unique_violation(&err) {
            ApiError::UsernameTaken
        } else {
            err.into()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite").to_str().unwrap().to_string();
        storage::init(&path).unwrap();
        (dir, path)
    }

    #[test]
    fn blank_credentials_are_rejected() {
        let (_dir, db) = test_db();
        assert!(matches!(
            register(&db, "", "secret"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            register(&db, "alice", ""),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn over_length_usernames_are_rejected() {
        let (_dir, db) = test_db();
        let long = "x".repeat(MAX_USERNAME_LEN + 1);
        assert!(matches!(
            register(&db, &long, "secret"),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn second_signup_with_the_same_username_conflicts() {
        let (_dir, db) = test_db();
        register(&db, "alice", "secret").unwrap();

        assert!(matches!(
            register(&db, "alice", "other"),
            Err(ApiError::UsernameTaken)
        ));
    }

    #[test]
    fn the_stored_credential_is_a_digest() {
        let (_dir, db) = test_db();
        let user = register(&db, "alice", "secret").unwrap();

        assert_ne!(user.password_hash, "secret");
        assert!(password::verify("secret", &user.password_hash));
    }
}
