pub mod password;
pub mod validate;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::session::SessionId;
use crate::models::user::UserId;

/// Claims carried by the signed session token. `jti` points at the
/// server-tracked session record, `sub` at the user it was issued to.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub jti: SessionId,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: UserId, session_id: SessionId) -> Self {
        let now = Utc::now();
        let ttl_hours = config::config().security.session_ttl_hours;
        let exp = (now + Duration::hours(ttl_hours as i64)).timestamp();

        Self {
            sub: user_id,
            jti: session_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token generation error: {0}")]
    Generation(String),
    #[error("invalid session token: {0}")]
    Invalid(String),
    #[error("session secret not configured")]
    MissingSecret,
}

pub fn generate_token(claims: &Claims) -> Result<String, TokenError> {
    let secret = &config::config().security.session_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| TokenError::Generation(e.to_string()))
}

pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let secret = &config::config().security.session_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| TokenError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let user_id = UserId::new();
        let session_id = SessionId::new();
        let claims = Claims::new(user_id, session_id);

        let token = generate_token(&claims).unwrap();
        let decoded = decode_token(&token).unwrap();

        assert_eq!(decoded.sub, user_id);
        assert_eq!(decoded.jti, session_id);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            decode_token("not-a-token"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let claims = Claims::new(UserId::new(), SessionId::new());
        let mut token = generate_token(&claims).unwrap();
        // Flip a character in the signature segment
        let flipped = if token.ends_with('a') { 'b' } else { 'a' };
        token.pop();
        token.push(flipped);

        assert!(decode_token(&token).is_err());
    }
}
