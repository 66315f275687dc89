//! Best-effort parsing for JSON-typed database columns.
//!
//! Read models embed nested structures (categories, attributes, variants,
//! images, metadata) as JSON columns. Historical rows occasionally carry
//! malformed JSON; a single bad row must not fail a whole page. Every
//! hydration path goes through [`parse_or_default`], which degrades the
//! affected field to its `Default` value and logs the failure so the data
//! loss stays observable.

use serde::de::DeserializeOwned;

/// Parse a JSON column, falling back to `T::default()` on absent or
/// malformed input. `entity`, `column` and `row_id` identify the offending
/// row in the warning log.
pub fn parse_or_default<T>(raw: Option<&str>, entity: &str, column: &str, row_id: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return T::default(),
    };

    match serde_json::from_str::<T>(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                entity = entity,
                column = column,
                row_id = row_id,
                error = %e,
                "malformed JSON column, field defaulted to empty"
            );
            T::default()
        }
    }
}
