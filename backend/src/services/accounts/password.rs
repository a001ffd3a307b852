//! Password digests. Argon2 in PHC string form; plaintext never reaches
//! the database.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::ApiError;

pub fn hash(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|_| ApiError::PasswordHash)
}

/// A malformed stored digest fails verification instead of erroring.
pub fn verify(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_not_the_plaintext() {
        let digest = hash("hunter2").unwrap();
        assert_ne!(digest, "hunter2");
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn two_digests_of_one_password_differ_by_salt() {
        let a = hash("hunter2").unwrap();
        let b = hash("hunter2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_accepts_the_right_password() {
        let digest = hash("correct horse").unwrap();
        assert!(verify("correct horse", &digest));
    }

    #[test]
    fn verify_rejects_the_wrong_password() {
        let digest = hash("correct horse").unwrap();
        assert!(!verify("battery staple", &digest));
    }

    #[test]
    fn verify_rejects_garbage_digests() {
        assert!(!verify("anything", "not-a-phc-string"));
    }
}
