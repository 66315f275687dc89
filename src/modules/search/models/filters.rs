use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Product search filter object, transported between client and server as a
/// base64-encoded JSON blob in a single query parameter (`FiltersBase64`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    pub search_query: String,
    pub category_slugs: Vec<String>,
    /// attribute name -> accepted values, all must match one value each
    pub attribute_filters: HashMap<String, Vec<String>>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub in_stock_only: bool,
    pub active_only: bool,
    pub page_number: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub sort_descending: bool,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category_slugs: Vec::new(),
            attribute_filters: HashMap::new(),
            price_min: None,
            price_max: None,
            in_stock_only: false,
            active_only: true,
            page_number: 1,
            page_size: 20,
            sort_by: "name".to_string(),
            sort_descending: false,
        }
    }
}

impl ProductFilters {
    /// Business-rule validation, separate from transport decoding. Runs
    /// after [`super::codec::decode`] and before any query is composed.
    pub fn validate(&self) -> Result<()> {
        if self.page_number < 1 {
            return Err(AppError::validation_field(
                "Search.InvalidPageNumber",
                "Page number must be at least 1",
                "pageNumber",
                format!("got {}", self.page_number),
            ));
        }
        if self.page_size < 1 {
            return Err(AppError::validation_field(
                "Search.InvalidPageSize",
                "Page size must be at least 1",
                "pageSize",
                format!("got {}", self.page_size),
            ));
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(AppError::validation_field(
                    "Search.InvalidPriceRange",
                    "Minimum price must not exceed maximum price",
                    "priceMin",
                    format!("{} > {}", min, max),
                ));
            }
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        (self.page_number - 1) * self.page_size
    }
}
