use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Raw category grid row
#[derive(Debug, Clone, FromRow)]
pub struct CategoryGridRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub product_count: i64,
}

/// Category projection for grid responses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub product_count: i64,
}

impl CategoryDto {
    pub fn from_row(row: CategoryGridRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            parent_id: row.parent_id,
            is_active: row.is_active,
            created_at: row.created_at,
            product_count: row.product_count,
        }
    }
}
