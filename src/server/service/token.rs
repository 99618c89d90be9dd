//! JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::user::User};

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a string.
    pub sub: String,
    pub username: String,
    /// Issued at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Parses the subject back into a user ID.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(ErrorKind::InvalidSubject.into()))
    }
}

/// Signs and verifies HS256 access tokens.
///
/// Cheap to clone; keys are derived once from the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    /// Creates a token service from the shared secret and token lifetime in days.
    pub fn new(secret: &str, lifetime_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::days(lifetime_days),
        }
    }

    /// Issues a token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AuthError::TokenIssue)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::TokenIssue)
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;

        Ok(data.claims)
    }
}
