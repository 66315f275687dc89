//! Static column registries for grid-capable entities.
//!
//! Client-facing column keys never reach the statement text directly; the
//! composer only ever emits the physical column names registered here, so the
//! registry doubles as the SQL allow-list.

/// One grid column: client key, physical storage column, capability flags
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub physical: &'static str,
    pub searchable: bool,
    pub orderable: bool,
}

/// Per-entity registry: projection, source, columns and the default sort
/// used whenever a requested sort cannot be honored
#[derive(Debug, Clone, Copy)]
pub struct GridColumns {
    pub entity: &'static str,
    pub select_clause: &'static str,
    pub from_clause: &'static str,
    pub columns: &'static [ColumnDef],
    pub default_sort: &'static str,
}

impl GridColumns {
    /// Columns the global search box applies to
    pub fn searchable(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.searchable)
    }
}

/// Grid-capable entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEntity {
    Products,
    Categories,
    Attributes,
}

impl GridEntity {
    pub fn columns(&self) -> &'static GridColumns {
        match self {
            GridEntity::Products => &PRODUCT_GRID,
            GridEntity::Categories => &CATEGORY_GRID,
            GridEntity::Attributes => &ATTRIBUTE_GRID,
        }
    }
}

pub static PRODUCT_GRID: GridColumns = GridColumns {
    entity: "products",
    select_clause: "p.id, p.name, p.slug, p.sku, p.base_price, p.stock_quantity, \
         p.is_active, p.created_at, p.updated_at, \
         CAST(p.metadata AS CHAR) AS metadata_json, \
         (SELECT JSON_ARRAYAGG(JSON_OBJECT('id', c.id, 'name', c.name, 'slug', c.slug)) \
            FROM categories c \
            JOIN product_categories pc ON pc.category_id = c.id \
           WHERE pc.product_id = p.id) AS categories_json, \
         (SELECT JSON_ARRAYAGG(JSON_OBJECT('attributeId', a.id, 'name', a.name, \
                 'displayName', a.display_name, 'value', pa.value)) \
            FROM attributes a \
            JOIN product_attributes pa ON pa.attribute_id = a.id \
           WHERE pa.product_id = p.id) AS attributes_json, \
         (SELECT JSON_ARRAYAGG(JSON_OBJECT('id', v.id, 'sku', v.sku, 'price', v.price, \
                 'stockQuantity', v.stock_quantity, 'attributes', v.attributes)) \
            FROM product_variants v \
           WHERE v.product_id = p.id) AS variants_json, \
         (SELECT JSON_ARRAYAGG(JSON_OBJECT('id', i.id, 'url', i.url, \
                 'altText', i.alt_text, 'displayOrder', i.display_order)) \
            FROM product_images i \
           WHERE i.product_id = p.id) AS images_json",
    from_clause: "products p",
    columns: &[
        ColumnDef { key: "name", physical: "p.name", searchable: true, orderable: true },
        ColumnDef { key: "slug", physical: "p.slug", searchable: true, orderable: true },
        ColumnDef { key: "sku", physical: "p.sku", searchable: true, orderable: true },
        ColumnDef { key: "basePrice", physical: "p.base_price", searchable: false, orderable: true },
        ColumnDef { key: "stockQuantity", physical: "p.stock_quantity", searchable: false, orderable: true },
        ColumnDef { key: "isActive", physical: "p.is_active", searchable: false, orderable: true },
        ColumnDef { key: "createdAt", physical: "p.created_at", searchable: false, orderable: true },
    ],
    default_sort: "p.name",
};

pub static CATEGORY_GRID: GridColumns = GridColumns {
    entity: "categories",
    select_clause: "c.id, c.name, c.slug, c.parent_id, c.is_active, c.created_at, \
         (SELECT COUNT(*) FROM product_categories pc WHERE pc.category_id = c.id) \
            AS product_count",
    from_clause: "categories c",
    columns: &[
        ColumnDef { key: "name", physical: "c.name", searchable: true, orderable: true },
        ColumnDef { key: "slug", physical: "c.slug", searchable: true, orderable: true },
        ColumnDef { key: "isActive", physical: "c.is_active", searchable: false, orderable: true },
        ColumnDef { key: "createdAt", physical: "c.created_at", searchable: false, orderable: true },
    ],
    default_sort: "c.name",
};

pub static ATTRIBUTE_GRID: GridColumns = GridColumns {
    entity: "attributes",
    select_clause: "a.id, a.name, a.display_name, a.attribute_type, a.is_filterable, \
         a.is_searchable, a.created_at, a.updated_at, \
         CAST(a.configuration AS CHAR) AS configuration_json",
    from_clause: "attributes a",
    columns: &[
        ColumnDef { key: "name", physical: "a.name", searchable: true, orderable: true },
        ColumnDef { key: "displayName", physical: "a.display_name", searchable: true, orderable: true },
        ColumnDef { key: "type", physical: "a.attribute_type", searchable: true, orderable: true },
        ColumnDef { key: "isFilterable", physical: "a.is_filterable", searchable: false, orderable: true },
        ColumnDef { key: "createdAt", physical: "a.created_at", searchable: false, orderable: true },
    ],
    default_sort: "a.name",
};
