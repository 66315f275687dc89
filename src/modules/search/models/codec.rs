//! Transport codec for the filter blob.
//!
//! Encoding is JSON -> UTF-8 bytes -> standard base64. Decoding reverses
//! exactly and performs no business validation; that stays a separate,
//! explicit step on the decoded value.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::filters::ProductFilters;

/// Why a filter blob failed to decode. The base64 and JSON cases are kept
/// distinct so client-facing diagnostics stay actionable.
#[derive(thiserror::Error, Debug)]
pub enum FilterDecodeError {
    #[error("Filters parameter must not be empty")]
    Empty,

    #[error("Filters parameter is not a valid base64 encoded string")]
    NotBase64(#[source] base64::DecodeError),

    #[error("Filters parameter decoded to bytes that are not valid UTF-8")]
    NotUtf8(#[source] std::string::FromUtf8Error),

    #[error("Filters parameter is not valid filter JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

impl FilterDecodeError {
    pub fn code(&self) -> &'static str {
        match self {
            FilterDecodeError::Empty => "Filters.Empty",
            FilterDecodeError::NotBase64(_) => "Filters.NotBase64",
            FilterDecodeError::NotUtf8(_) => "Filters.NotUtf8",
            FilterDecodeError::InvalidJson(_) => "Filters.InvalidJson",
        }
    }
}

/// Serialize `filters` to JSON and wrap it in standard base64.
///
/// Serialization of a plain data struct cannot fail, so this is infallible.
pub fn encode(filters: &ProductFilters) -> String {
    let json = serde_json::to_vec(filters).unwrap_or_default();
    STANDARD.encode(json)
}

/// Reverse [`encode`]. Empty/whitespace input, a broken base64 alphabet or
/// padding, non-UTF8 payloads and invalid JSON each map to their own
/// [`FilterDecodeError`] variant.
pub fn decode(blob: &str) -> Result<ProductFilters, FilterDecodeError> {
    let blob = blob.trim();
    if blob.is_empty() {
        return Err(FilterDecodeError::Empty);
    }

    let bytes = STANDARD.decode(blob).map_err(FilterDecodeError::NotBase64)?;
    let json = String::from_utf8(bytes).map_err(FilterDecodeError::NotUtf8)?;
    serde_json::from_str(&json).map_err(FilterDecodeError::InvalidJson)
}
