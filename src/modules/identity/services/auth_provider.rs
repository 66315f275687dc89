use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::identity::models::AuthTokens;

/// Authentication collaborator. Token issuance, hashing and persistence live
/// behind this seam; the application layer only sees typed results. Domain
/// failures come back as `AppError::Domain` with stable codes
/// (`User.InvalidCredentials`, `User.TokenExpired`, ...).
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthTokens>;

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens>;

    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<()>;

    async fn request_password_reset(&self, email: &str) -> Result<()>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()>;

    async fn verify_email(&self, user_id: Uuid, token: &str) -> Result<()>;
}
