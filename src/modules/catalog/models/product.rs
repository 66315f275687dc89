//! Product read models.
//!
//! Grid and search queries return flat rows with the nested structures
//! (categories, attributes, variants, images) pre-aggregated into JSON text
//! columns. Hydration parses each JSON column independently per row: a
//! malformed sub-structure degrades that one field to empty instead of
//! failing the page.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::json::parse_or_default;

/// Category entry embedded in a product projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Attribute value attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeDto {
    pub attribute_id: String,
    pub name: String,
    pub display_name: String,
    /// Schema-less attribute value, shape depends on the attribute type
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDto {
    pub id: String,
    pub sku: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i64,
    /// Variant-defining attribute values (e.g. size, color)
    #[serde(default)]
    pub attributes: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub display_order: i64,
}

/// Raw product grid/search row as fetched from MySQL. The `*_json` columns
/// hold the aggregated sub-structures as JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct ProductGridRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub sku: Option<String>,
    pub base_price: Decimal,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata_json: Option<String>,
    pub categories_json: Option<String>,
    pub attributes_json: Option<String>,
    pub variants_json: Option<String>,
    pub images_json: Option<String>,
}

/// Flat product projection for list/grid/search responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItemDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub sku: Option<String>,
    pub base_price: Decimal,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Open-ended metadata map; empty when the column is absent or malformed
    pub metadata: HashMap<String, serde_json::Value>,
    pub categories: Vec<ProductCategoryDto>,
    pub attributes: Vec<ProductAttributeDto>,
    pub variants: Vec<VariantDto>,
    pub images: Vec<ImageDto>,
}

impl ProductListItemDto {
    /// Hydrate one raw row. JSON columns are parsed independently; failures
    /// are logged and degrade to empty collections.
    pub fn from_row(row: ProductGridRow) -> Self {
        let metadata =
            parse_or_default(row.metadata_json.as_deref(), "product", "metadata", &row.id);
        let categories =
            parse_or_default(row.categories_json.as_deref(), "product", "categories", &row.id);
        let attributes =
            parse_or_default(row.attributes_json.as_deref(), "product", "attributes", &row.id);
        let variants =
            parse_or_default(row.variants_json.as_deref(), "product", "variants", &row.id);
        let images = parse_or_default(row.images_json.as_deref(), "product", "images", &row.id);

        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            sku: row.sku,
            base_price: row.base_price,
            stock_quantity: row.stock_quantity,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            metadata,
            categories,
            attributes,
            variants,
            images,
        }
    }
}
