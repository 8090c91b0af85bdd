use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Argon2id hash in PHC string form.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServiceError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
    }
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Validation(format!("hashing failed: {e}")))
}

/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}
