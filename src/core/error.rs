use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::collections::HashMap;

use crate::modules::search::models::FilterDecodeError;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every failure that leaves the application layer is one of these variants;
/// handlers never let raw exceptions from collaborators escape. Validation and
/// domain variants carry a stable string code (e.g. `User.InvalidCredentials`)
/// so callers and tests can match exactly instead of parsing messages.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed input caught before any handler logic runs
    #[error("Validation error: {message}")]
    Validation {
        code: String,
        message: String,
        /// Per-field detail map (field name -> problem), may be empty
        fields: HashMap<String, String>,
    },

    /// Business-rule failure with a stable code
    #[error("{message}")]
    Domain { code: String, message: String },

    /// Malformed filter blob in a query parameter
    #[error("{0}")]
    Decoding(#[from] FilterDecodeError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unhandled collaborator failure rewrapped at the handler boundary
    #[error("{message}")]
    Unexpected { code: String, message: String },
}

impl AppError {
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            code: code.into(),
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Validation error pointing at a specific field
    pub fn validation_field(
        code: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        let mut fields = HashMap::new();
        fields.insert(field.into(), detail.into());
        AppError::Validation {
            code: code.into(),
            message: message.into(),
            fields,
        }
    }

    pub fn domain(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Domain {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    /// Rewrap an unhandled collaborator error as `{feature}.Failed`, keeping
    /// the source message for diagnostics
    pub fn unexpected(feature: &str, source: impl std::fmt::Display) -> Self {
        AppError::Unexpected {
            code: format!("{}.Failed", feature),
            message: format!("{} failed: {}", feature, source),
        }
    }

    /// Boundary rewrap: expected failures (validation, domain, decoding,
    /// not-found) pass through untouched; anything else becomes
    /// `{feature}.Failed` so callers never see a raw infrastructure error.
    pub fn or_feature_failure(self, feature: &str) -> AppError {
        match self {
            e @ (AppError::Validation { .. }
            | AppError::Domain { .. }
            | AppError::Decoding(_)
            | AppError::NotFound(_)) => e,
            other => AppError::unexpected(feature, other),
        }
    }

    /// Stable error code, when the variant carries one
    pub fn code(&self) -> Option<&str> {
        match self {
            AppError::Validation { code, .. }
            | AppError::Domain { code, .. }
            | AppError::Unexpected { code, .. } => Some(code),
            AppError::Decoding(e) => Some(e.code()),
            _ => None,
        }
    }

    /// Per-field metadata for validation errors
    pub fn fields(&self) -> Option<&HashMap<String, String>> {
        match self {
            AppError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let mut body = serde_json::json!({
            "error": {
                "message": self.to_string(),
                "status": status_code.as_u16(),
            }
        });
        if let Some(code) = self.code() {
            body["error"]["code"] = serde_json::Value::String(code.to_string());
        }
        if let Some(fields) = self.fields() {
            if !fields.is_empty() {
                body["error"]["fields"] =
                    serde_json::to_value(fields).unwrap_or(serde_json::Value::Null);
            }
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Decoding(_) => StatusCode::BAD_REQUEST,
            AppError::Domain { code, .. } => domain_status(code),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Map well-known domain codes onto the closest HTTP status
fn domain_status(code: &str) -> StatusCode {
    match code {
        "User.InvalidCredentials"
        | "User.TokenExpired"
        | "User.TokenRevoked"
        | "User.TokenNotFound"
        | "User.ResetTokenInvalid" => StatusCode::UNAUTHORIZED,
        "User.AccountInactive" | "User.EmailNotVerified" => StatusCode::FORBIDDEN,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
