use serde::Serialize;

/// Upper bound on username length, mirrored by the schema.
pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 digest in PHC string form; never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
}
