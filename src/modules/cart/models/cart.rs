use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::core::json::parse_or_default;

#[derive(Debug, Clone, FromRow)]
pub struct CartRow {
    pub id: String,
    pub user_id: Option<String>,
    pub metadata_json: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CartItemRow {
    pub id: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Product name/slug/image captured at add-to-cart time
    pub product_snapshot_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub product_snapshot: HashMap<String, serde_json::Value>,
}

impl CartItemDto {
    pub fn from_row(row: CartItemRow) -> Self {
        let product_snapshot = parse_or_default(
            row.product_snapshot_json.as_deref(),
            "cart_item",
            "product_snapshot",
            &row.id,
        );
        Self {
            id: row.id,
            product_id: row.product_id,
            variant_id: row.variant_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
            product_snapshot,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: String,
    pub user_id: Option<String>,
    pub items: Vec<CartItemDto>,
    pub metadata: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartDto {
    pub fn from_rows(cart: CartRow, items: Vec<CartItemRow>) -> Self {
        let metadata =
            parse_or_default(cart.metadata_json.as_deref(), "cart", "metadata", &cart.id);
        Self {
            id: cart.id,
            user_id: cart.user_id,
            items: items.into_iter().map(CartItemDto::from_row).collect(),
            metadata,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.line_total()).sum()
    }
}
