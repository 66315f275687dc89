use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::json::parse_or_default;

/// Attribute value kinds supported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Text,
    Number,
    Boolean,
    Select,
    Color,
}

impl Default for AttributeType {
    fn default() -> Self {
        AttributeType::Text
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeType::Text => write!(f, "text"),
            AttributeType::Number => write!(f, "number"),
            AttributeType::Boolean => write!(f, "boolean"),
            AttributeType::Select => write!(f, "select"),
            AttributeType::Color => write!(f, "color"),
        }
    }
}

impl std::str::FromStr for AttributeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(AttributeType::Text),
            "number" => Ok(AttributeType::Number),
            "boolean" => Ok(AttributeType::Boolean),
            "select" => Ok(AttributeType::Select),
            "color" => Ok(AttributeType::Color),
            _ => Err(format!("Invalid attribute type: {}", s)),
        }
    }
}

/// Raw attribute grid row, configuration as JSON text
#[derive(Debug, Clone, FromRow)]
pub struct AttributeGridRow {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub attribute_type: String,
    pub is_filterable: bool,
    pub is_searchable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub configuration_json: Option<String>,
}

/// Attribute projection with its loosely typed configuration map
/// (e.g. select options, numeric ranges, display hints)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDto {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub attribute_type: AttributeType,
    pub is_filterable: bool,
    pub is_searchable: bool,
    pub configuration: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttributeDto {
    pub fn from_row(row: AttributeGridRow) -> Self {
        let configuration = parse_or_default(
            row.configuration_json.as_deref(),
            "attribute",
            "configuration",
            &row.id,
        );
        let attribute_type = row.attribute_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                row_id = %row.id,
                value = %row.attribute_type,
                "unknown attribute type, treating as text"
            );
            AttributeType::Text
        });

        Self {
            id: row.id,
            name: row.name,
            display_name: row.display_name,
            attribute_type,
            is_filterable: row.is_filterable,
            is_searchable: row.is_searchable,
            configuration,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
