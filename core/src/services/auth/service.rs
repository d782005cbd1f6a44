//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::LoginOutcome;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::credential::CredentialService;
use crate::services::token::TokenService;

/// Authentication service covering the two unauthenticated operations:
/// registration and login.
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Password hashing and verification
    credential_service: Arc<CredentialService>,
    /// Session token issuance
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service.
    pub fn new(
        user_repository: Arc<U>,
        credential_service: Arc<CredentialService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            credential_service,
            token_service,
        }
    }

    /// Register a new user.
    ///
    /// The password is hashed before it reaches the repository; a duplicate
    /// username surfaces as `AuthError::UserAlreadyExists` via the store's
    /// unique index, never a pre-check.
    pub async fn register(&self, username: &str, password: &str) -> DomainResult<()> {
        let password_hash = self.credential_service.hash(password).await?;

        let created = self
            .user_repository
            .create(NewUser::new(username, password_hash))
            .await
            .map_err(|e| match e {
                DomainError::DuplicateKey { .. } => DomainError::Auth(AuthError::UserAlreadyExists),
                other => other,
            })?;

        info!(user_id = created.id, "User registered");
        Ok(())
    }

    /// Authenticate a user and issue a session token.
    ///
    /// An unknown username and a wrong password both yield
    /// `AuthError::InvalidCredentials`. The unknown-username path still
    /// performs a hash verification so the two are indistinguishable by
    /// timing as well as by message.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                self.credential_service.verify_dummy(password).await?;
                debug!("Login rejected for unknown username");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        if !self
            .credential_service
            .verify(password, &user.password_hash)
            .await?
        {
            debug!(user_id = user.id, "Login rejected for bad password");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let token = self.token_service.issue(user.id, &user.username)?;
        info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome::new(token, self.token_service.expiry_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::MockUserRepository;
    use crate::services::token::TokenConfig;

    fn auth_service() -> AuthService<MockUserRepository> {
        AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(CredentialService::with_cost(4)),
            Arc::new(TokenService::new(TokenConfig::new("test-secret", 3600))),
        )
    }

    #[tokio::test]
    async fn test_register_then_login_issues_verifiable_token() {
        let service = auth_service();
        service.register("alice", "hunter2").await.unwrap();

        let outcome = service.login("alice", "hunter2").await.unwrap();
        assert_eq!(outcome.expires_in, 3600);

        let verifier = TokenService::new(TokenConfig::new("test-secret", 3600));
        let claims = verifier.verify(&outcome.token).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected_first_still_works() {
        let service = auth_service();
        service.register("alice", "hunter2").await.unwrap();

        let result = service.register("alice", "other-password").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::UserAlreadyExists))
        ));

        // First registration remains loggable-in.
        assert!(service.login("alice", "hunter2").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let service = auth_service();
        service.register("alice", "hunter2").await.unwrap();

        let wrong_password = service.login("alice", "wrong").await.unwrap_err();
        let unknown_user = service.login("nobody", "wrong").await.unwrap_err();

        assert_eq!(
            wrong_password.to_string(),
            "Invalid username or password."
        );
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
