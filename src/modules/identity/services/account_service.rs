//! Account command handlers.
//!
//! Validation always runs before the authentication collaborator is touched,
//! so a malformed command never reaches it. Domain failures from the
//! collaborator pass through with their codes intact; anything unexpected is
//! rewrapped as `{Feature}.Failed`.

use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::identity::models::{
    AuthTokens, ChangePasswordCommand, LoginCommand, RefreshTokenCommand,
    RequestPasswordResetCommand, ResetPasswordCommand, VerifyEmailCommand,
};
use crate::modules::identity::services::auth_provider::AuthProvider;

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AccountService {
    auth: Arc<dyn AuthProvider>,
}

impl AccountService {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    pub async fn login(&self, command: LoginCommand) -> Result<AuthTokens> {
        validate_email(&command.email)?;
        if command.password.is_empty() {
            return Err(AppError::validation_field(
                "User.PasswordRequired",
                "Password is required",
                "password",
                "must not be empty",
            ));
        }

        self.auth
            .authenticate(&command.email, &command.password)
            .await
            .map_err(|e| e.or_feature_failure("Login"))
    }

    pub async fn refresh_token(&self, command: RefreshTokenCommand) -> Result<AuthTokens> {
        if command.refresh_token.trim().is_empty() {
            return Err(AppError::validation_field(
                "User.TokenRequired",
                "Refresh token is required",
                "refreshToken",
                "must not be empty",
            ));
        }

        self.auth
            .refresh(&command.refresh_token)
            .await
            .map_err(|e| e.or_feature_failure("RefreshToken"))
    }

    pub async fn change_password(&self, command: ChangePasswordCommand) -> Result<()> {
        if command.current_password.is_empty() {
            return Err(AppError::validation_field(
                "User.PasswordRequired",
                "Current password is required",
                "currentPassword",
                "must not be empty",
            ));
        }
        validate_new_password(&command.new_password, &command.confirm_password)?;
        if command.new_password == command.current_password {
            return Err(AppError::validation_field(
                "User.NewPasswordSameAsCurrent",
                "New password must differ from the current password",
                "newPassword",
                "matches current password",
            ));
        }

        self.auth
            .change_password(
                command.user_id,
                &command.current_password,
                &command.new_password,
            )
            .await
            .map_err(|e| e.or_feature_failure("ChangePassword"))
    }

    pub async fn request_password_reset(
        &self,
        command: RequestPasswordResetCommand,
    ) -> Result<()> {
        validate_email(&command.email)?;

        self.auth
            .request_password_reset(&command.email)
            .await
            .map_err(|e| e.or_feature_failure("RequestPasswordReset"))
    }

    pub async fn reset_password(&self, command: ResetPasswordCommand) -> Result<()> {
        if command.token.trim().is_empty() {
            return Err(AppError::validation_field(
                "User.TokenRequired",
                "Reset token is required",
                "token",
                "must not be empty",
            ));
        }
        validate_new_password(&command.new_password, &command.confirm_password)?;

        self.auth
            .reset_password(&command.token, &command.new_password)
            .await
            .map_err(|e| e.or_feature_failure("ResetPassword"))
    }

    pub async fn verify_email(&self, command: VerifyEmailCommand) -> Result<()> {
        if command.token.trim().is_empty() {
            return Err(AppError::validation_field(
                "User.TokenRequired",
                "Verification token is required",
                "token",
                "must not be empty",
            ));
        }

        self.auth
            .verify_email(command.user_id, &command.token)
            .await
            .map_err(|e| e.or_feature_failure("VerifyEmail"))
    }
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::validation_field(
            "User.EmailRequired",
            "Email is required",
            "email",
            "must not be empty",
        ));
    }
    // Format check only; deliverability is the collaborator's concern
    let well_formed = email.split_once('@').map_or(false, |(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
    if !well_formed {
        return Err(AppError::validation_field(
            "User.InvalidEmailFormat",
            "Email address is not valid",
            "email",
            email,
        ));
    }
    Ok(())
}

fn validate_new_password(new_password: &str, confirm_password: &str) -> Result<()> {
    if new_password.is_empty() {
        return Err(AppError::validation_field(
            "User.PasswordRequired",
            "New password is required",
            "newPassword",
            "must not be empty",
        ));
    }
    if new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation_field(
            "User.PasswordTooShort",
            format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            "newPassword",
            format!("got {} characters", new_password.len()),
        ));
    }
    if new_password != confirm_password {
        return Err(AppError::validation_field(
            "User.PasswordMismatch",
            "Password confirmation does not match",
            "confirmPassword",
            "does not match newPassword",
        ));
    }
    Ok(())
}
