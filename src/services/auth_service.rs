use std::sync::Arc;

use chrono::Utc;

use crate::auth::validate::{validate_email, validate_password, validate_username};
use crate::auth::{self, password, Claims};
use crate::config;
use crate::models::session::{SessionId, SessionRecord};
use crate::models::user::{User, UserId, UserSummary};
use crate::store::{SessionStore, StoreError, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not authenticated")]
    Unauthenticated,
    #[error("{0}")]
    InvalidInput(String),
    #[error("credential hashing failed")]
    Hash,
    #[error("session token generation failed")]
    Token,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registration input, validated before any record is created.
#[derive(Debug)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Session authenticator: issues sessions on register/login, resolves
/// presented tokens to identities, and revokes sessions on logout.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Create an account and open its first session.
    pub async fn register(&self, reg: Registration) -> Result<(UserSummary, String), AuthError> {
        validate_username(reg.username.trim()).map_err(AuthError::InvalidInput)?;
        validate_email(reg.email.trim()).map_err(AuthError::InvalidInput)?;
        validate_password(&reg.password).map_err(AuthError::InvalidInput)?;

        let password_hash = password::hash_password(&reg.password).map_err(|e| {
            tracing::error!("password hashing failed: {}", e);
            AuthError::Hash
        })?;

        let user = User {
            id: UserId::new(),
            username: reg.username.trim().to_string(),
            email: reg.email.trim().to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        };

        match self.users.insert(user.clone()).await {
            Ok(()) => {}
            Err(StoreError::Conflict(_)) => {
                return Err(AuthError::InvalidInput(
                    "Email is already registered".to_string(),
                ))
            }
            Err(e) => return Err(e.into()),
        }

        let token = self.open_session(user.id).await?;
        Ok((user.summary(), token))
    }

    /// Verify credentials and open a session. Unknown email and wrong
    /// password are indistinguishable to the caller: both cost one hash
    /// verification and both return [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, secret: &str) -> Result<(UserSummary, String), AuthError> {
        let email = email.trim().to_lowercase();
        let user = self.users.find_by_email(&email).await?;

        let verified = match &user {
            Some(user) => password::verify_password(secret, &user.password_hash),
            None => {
                password::verify_dummy(secret);
                false
            }
        };

        let user = match (user, verified) {
            (Some(user), true) => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.open_session(user.id).await?;
        Ok((user.summary(), token))
    }

    /// Resolve a presented token to an identity: signature and expiry check,
    /// then session lookup, then user lookup. Every failure collapses to
    /// [`AuthError::Unauthenticated`].
    pub async fn authenticate(&self, token: &str) -> Result<(UserSummary, SessionId), AuthError> {
        let claims = auth::decode_token(token).map_err(|e| {
            tracing::debug!("session token rejected: {}", e);
            AuthError::Unauthenticated
        })?;

        let session = self
            .sessions
            .find(claims.jti)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if session.is_expired(Utc::now()) {
            return Err(AuthError::Unauthenticated);
        }

        // Token and session must agree on the user they were issued to.
        if session.user_id != claims.sub {
            return Err(AuthError::Unauthenticated);
        }

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        Ok((user.summary(), session.id))
    }

    /// Revoke a session. The matching token stops resolving immediately.
    pub async fn logout(&self, session_id: SessionId) -> Result<(), AuthError> {
        self.sessions.remove(session_id).await?;
        Ok(())
    }

    async fn open_session(&self, user_id: UserId) -> Result<String, AuthError> {
        let record = SessionRecord::open(user_id, config::config().security.session_ttl_hours);
        let claims = Claims::new(user_id, record.id);

        let token = auth::generate_token(&claims).map_err(|e| {
            tracing::error!("session token generation failed: {}", e);
            AuthError::Token
        })?;

        self.sessions.insert(record).await?;
        Ok(token)
    }
}
