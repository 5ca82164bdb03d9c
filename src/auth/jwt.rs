use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::models::SessionClaims;

pub fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or(0)
}

/// HS256-signs any claims set. Used for both session and flash cookies.
pub fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Checks signature and `exp`.
pub fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, Error> {
    decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

pub fn generate_session_token(
    user_id: i64,
    username: String,
    secret: &str,
    ttl: usize,
) -> Result<String, Error> {
    let claims = SessionClaims {
        user_id,
        sub: username,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    sign(&claims, secret)
}

pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims, Error> {
    verify(token, secret)
}
