use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::json::parse_or_default;

/// Order fulfillment lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

/// Payment state, tracked separately from fulfillment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Succeeded => write!(f, "succeeded"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "succeeded" => Ok(PaymentStatus::Succeeded),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub payment_status: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub metadata_json: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub id: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub product_snapshot_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub product_snapshot: HashMap<String, serde_json::Value>,
}

impl OrderItemDto {
    pub fn from_row(row: OrderItemRow) -> Self {
        let product_snapshot = parse_or_default(
            row.product_snapshot_json.as_deref(),
            "order_item",
            "product_snapshot",
            &row.id,
        );
        Self {
            id: row.id,
            product_id: row.product_id,
            variant_id: row.variant_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
            total_price: row.total_price,
            product_snapshot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub user_id: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub metadata: HashMap<String, serde_json::Value>,
    pub items: Vec<OrderItemDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderDto {
    /// Hydrate an order header plus its items. Unknown status strings are
    /// logged and mapped to the pending default rather than failing the page.
    pub fn from_rows(row: OrderRow, items: Vec<OrderItemRow>) -> Self {
        let status = row.status.parse().unwrap_or_else(|_| {
            tracing::warn!(row_id = %row.id, value = %row.status, "unknown order status");
            OrderStatus::default()
        });
        let payment_status = row.payment_status.parse().unwrap_or_else(|_| {
            tracing::warn!(row_id = %row.id, value = %row.payment_status, "unknown payment status");
            PaymentStatus::default()
        });
        let metadata = parse_or_default(row.metadata_json.as_deref(), "order", "metadata", &row.id);

        Self {
            id: row.id,
            user_id: row.user_id,
            status,
            payment_status,
            subtotal: row.subtotal,
            tax: row.tax,
            shipping_cost: row.shipping_cost,
            total: row.total,
            metadata,
            items: items.into_iter().map(OrderItemDto::from_row).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
