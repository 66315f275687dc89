pub mod commands;

pub use commands::{
    AuthTokens, ChangePasswordCommand, LoginCommand, RefreshTokenCommand,
    RequestPasswordResetCommand, ResetPasswordCommand, VerifyEmailCommand,
};
