// Account command handler tests.
//
// Validation is pipeline-style: a malformed command must be rejected before
// the authentication collaborator sees a single call. The stub provider
// records call counts so that ordering is asserted directly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::error::ResponseError;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use shopilent::core::{AppError, Result};
use shopilent::identity::models::{
    AuthTokens, ChangePasswordCommand, LoginCommand, RefreshTokenCommand,
    RequestPasswordResetCommand, ResetPasswordCommand, VerifyEmailCommand,
};
use shopilent::identity::services::{AccountService, AuthProvider};
use uuid::Uuid;

/// How the stub responds once validation lets a call through
#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    DomainError(&'static str),
    InfraError,
}

struct StubAuthProvider {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StubAuthProvider {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::DomainError(code) => Err(AppError::domain(code, "domain failure")),
            Behavior::InfraError => Err(AppError::Configuration(
                "connection reset by peer".to_string(),
            )),
        }
    }

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Utc::now() + Duration::minutes(15),
        }
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn authenticate(&self, _email: &str, _password: &str) -> Result<AuthTokens> {
        self.respond().map(|_| Self::tokens())
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<AuthTokens> {
        self.respond().map(|_| Self::tokens())
    }

    async fn change_password(
        &self,
        _user_id: Uuid,
        _current_password: &str,
        _new_password: &str,
    ) -> Result<()> {
        self.respond()
    }

    async fn request_password_reset(&self, _email: &str) -> Result<()> {
        self.respond()
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<()> {
        self.respond()
    }

    async fn verify_email(&self, _user_id: Uuid, _token: &str) -> Result<()> {
        self.respond()
    }
}

fn login(email: &str, password: &str) -> LoginCommand {
    LoginCommand {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn change_password(current: &str, new: &str, confirm: &str) -> ChangePasswordCommand {
    ChangePasswordCommand {
        user_id: Uuid::new_v4(),
        current_password: current.to_string(),
        new_password: new.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn login_with_empty_password_is_rejected_before_any_call() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .login(login("user@example.com", ""))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.PasswordRequired"));
    assert_eq!(err.status_code().as_u16(), 400);
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn login_with_empty_email_is_rejected_before_any_call() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service.login(login("", "hunter22!")).await.unwrap_err();
    assert_eq!(err.code(), Some("User.EmailRequired"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn login_with_malformed_email_is_rejected() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    for bad in ["no-at-sign", "user@", "@domain.com", "user@nodot"] {
        let err = service.login(login(bad, "hunter22!")).await.unwrap_err();
        assert_eq!(err.code(), Some("User.InvalidEmailFormat"), "email: {}", bad);
    }
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn valid_login_reaches_the_provider_once() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let tokens = service
        .login(login("user@example.com", "hunter22!"))
        .await
        .unwrap();
    assert_eq!(tokens.access_token, "access");
    assert_eq!(auth.call_count(), 1);
}

#[tokio::test]
async fn invalid_credentials_pass_through_with_their_code() {
    let auth = StubAuthProvider::new(Behavior::DomainError("User.InvalidCredentials"));
    let service = AccountService::new(auth.clone());

    let err = service
        .login(login("user@example.com", "wrong-password"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.InvalidCredentials"));
    assert_eq!(err.status_code().as_u16(), 401);
    assert_eq!(auth.call_count(), 1);
}

#[tokio::test]
async fn provider_failure_is_rewrapped_as_login_failed() {
    let auth = StubAuthProvider::new(Behavior::InfraError);
    let service = AccountService::new(auth.clone());

    let err = service
        .login(login("user@example.com", "hunter22!"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("Login.Failed"));
    // original message kept for diagnostics
    assert!(err.to_string().contains("connection reset by peer"));
    assert_eq!(err.status_code().as_u16(), 500);
}

#[tokio::test]
async fn change_password_same_as_current_is_rejected_before_any_call() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .change_password(change_password("same-pass-1", "same-pass-1", "same-pass-1"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.NewPasswordSameAsCurrent"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn change_password_confirmation_mismatch_is_rejected() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .change_password(change_password("old-pass-1", "new-pass-22", "new-pass-2X"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.PasswordMismatch"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn change_password_too_short_is_rejected() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .change_password(change_password("old-pass-1", "short", "short"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.PasswordTooShort"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn valid_change_password_reaches_the_provider() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    service
        .change_password(change_password("old-pass-1", "new-pass-22", "new-pass-22"))
        .await
        .unwrap();
    assert_eq!(auth.call_count(), 1);
}

#[tokio::test]
async fn refresh_with_blank_token_is_rejected() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .refresh_token(RefreshTokenCommand {
            refresh_token: "  ".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.TokenRequired"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn expired_refresh_token_code_passes_through() {
    let auth = StubAuthProvider::new(Behavior::DomainError("User.TokenExpired"));
    let service = AccountService::new(auth.clone());

    let err = service
        .refresh_token(RefreshTokenCommand {
            refresh_token: "stale-token".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.TokenExpired"));
    assert_eq!(err.status_code().as_u16(), 401);
}

#[tokio::test]
async fn password_reset_request_validates_email_first() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .request_password_reset(RequestPasswordResetCommand {
            email: "not-an-email".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.InvalidEmailFormat"));
    assert_eq!(auth.call_count(), 0);
}

#[tokio::test]
async fn reset_password_provider_failure_is_rewrapped() {
    let auth = StubAuthProvider::new(Behavior::InfraError);
    let service = AccountService::new(auth.clone());

    let err = service
        .reset_password(ResetPasswordCommand {
            token: "reset-token".to_string(),
            new_password: "new-pass-22".to_string(),
            confirm_password: "new-pass-22".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("ResetPassword.Failed"));
    assert_eq!(auth.call_count(), 1);
}

#[tokio::test]
async fn verify_email_requires_a_token() {
    let auth = StubAuthProvider::new(Behavior::Succeed);
    let service = AccountService::new(auth.clone());

    let err = service
        .verify_email(VerifyEmailCommand {
            user_id: Uuid::new_v4(),
            token: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("User.TokenRequired"));
    assert_eq!(auth.call_count(), 0);
}
