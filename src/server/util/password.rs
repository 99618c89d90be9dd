use argon2::Config;

use crate::server::error::auth::AuthError;

/// Hashes a password with Argon2 and a random 16-byte salt.
///
/// # Returns
/// - `Ok(String)` - PHC-encoded hash including salt and parameters
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt: [u8; 16] = rand::random();

    Ok(argon2::hash_encoded(
        password.as_bytes(),
        &salt,
        &Config::default(),
    )?)
}

/// Checks a password against a stored encoded hash.
///
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    argon2::verify_encoded(encoded, password.as_bytes()).unwrap_or(false)
}
