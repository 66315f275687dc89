//! Server-side grid request contract.
//!
//! Mirrors the jQuery DataTables AJAX protocol: draw counter, start offset,
//! page length, global search, column descriptors and ordered sort pairs.

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Sentinel page length meaning "return all rows"
pub const LENGTH_ALL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Global search box state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub regex: bool,
}

/// Client-side column descriptor echoed with the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRequest {
    pub data: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub orderable: bool,
}

/// One requested sort key: index into `columns` plus a direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: usize,
    pub dir: SortDirection,
}

/// A server-side paging/sorting/search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableRequest {
    #[serde(default)]
    pub draw: i64,
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_length")]
    pub length: i64,
    #[serde(default)]
    pub search: SearchSpec,
    #[serde(default)]
    pub columns: Vec<ColumnRequest>,
    #[serde(default)]
    pub order: Vec<OrderSpec>,
}

fn default_length() -> i64 {
    10
}

impl Default for DataTableRequest {
    fn default() -> Self {
        Self {
            draw: 1,
            start: 0,
            length: default_length(),
            search: SearchSpec::default(),
            columns: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl DataTableRequest {
    /// Reject negative offsets and lengths before the request reaches the
    /// query composer. A negative start or length (other than the
    /// [`LENGTH_ALL`] sentinel) signals a caller bug worth surfacing, so it
    /// is a validation failure rather than a silent clamp.
    pub fn validate(&self) -> Result<()> {
        if self.start < 0 {
            return Err(AppError::validation_field(
                "Grid.NegativeStart",
                "Start offset must not be negative",
                "start",
                format!("got {}", self.start),
            ));
        }
        if self.length < LENGTH_ALL {
            return Err(AppError::validation_field(
                "Grid.NegativeLength",
                "Page length must be non-negative or -1 for all rows",
                "length",
                format!("got {}", self.length),
            ));
        }
        Ok(())
    }

    /// Trimmed global search term, if one was supplied
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.value.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}
