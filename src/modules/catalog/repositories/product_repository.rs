//! Read-side product queries: DataTable grids, slug lookup and the
//! filtered/faceted search path.

use sqlx::{MySqlPool, QueryBuilder};

use super::grid_exec::fetch_grid_rows;
use crate::core::datatable::{compose, DataTableRequest, DataTableResult, PagedResult, PRODUCT_GRID};
use crate::core::Result;
use crate::modules::catalog::models::{ProductGridRow, ProductListItemDto};
use crate::modules::search::models::{CategoryFacet, ProductFilters};

/// Sort keys accepted on the search path; anything else falls back to the
/// default. Values are physical columns, never caller input.
fn search_sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "name" => "p.name",
        "price" | "basePrice" => "p.base_price",
        "createdAt" | "newest" => "p.created_at",
        "stockQuantity" => "p.stock_quantity",
        _ => "p.name",
    }
}

pub struct ProductReadRepository {
    pool: MySqlPool,
}

impl ProductReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Serve a server-side grid request over products
    pub async fn grid(
        &self,
        request: &DataTableRequest,
    ) -> Result<DataTableResult<ProductListItemDto>> {
        request.validate()?;
        let query = compose(request, &PRODUCT_GRID)?;
        let (total, filtered, rows) =
            fetch_grid_rows::<ProductGridRow>(&self.pool, &query).await?;
        let data = rows.into_iter().map(ProductListItemDto::from_row).collect();
        Ok(DataTableResult::new(request.draw, total, filtered, data))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<ProductListItemDto>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE p.slug = ?",
            PRODUCT_GRID.select_clause, PRODUCT_GRID.from_clause
        );
        let row = sqlx::query_as::<_, ProductGridRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ProductListItemDto::from_row))
    }

    /// Filtered, sorted, paginated product search. Filters are assumed
    /// validated (see `ProductFilters::validate`).
    pub async fn search(&self, filters: &ProductFilters) -> Result<PagedResult<ProductListItemDto>> {
        let mut count_qb: QueryBuilder<sqlx::MySql> =
            QueryBuilder::new("SELECT COUNT(*) FROM products p");
        push_search_predicates(&mut count_qb, filters, true);
        let total_count: i64 = count_qb.build_query_scalar().fetch_one(&self.pool).await?;

        let mut page_qb: QueryBuilder<sqlx::MySql> = QueryBuilder::new("SELECT ");
        page_qb.push(PRODUCT_GRID.select_clause);
        page_qb.push(" FROM products p");
        push_search_predicates(&mut page_qb, filters, true);

        let direction = if filters.sort_descending { "DESC" } else { "ASC" };
        page_qb.push(" ORDER BY ");
        page_qb.push(search_sort_column(&filters.sort_by));
        page_qb.push(" ");
        page_qb.push(direction);
        // id tiebreaker keeps ordering total, so contiguous pages never
        // overlap or skip rows that compare equal on the sort key
        page_qb.push(", p.id ASC");

        page_qb.push(" LIMIT ");
        page_qb.push_bind(filters.page_size);
        page_qb.push(" OFFSET ");
        page_qb.push_bind(filters.offset());

        let rows: Vec<ProductGridRow> =
            page_qb.build_query_as().fetch_all(&self.pool).await?;
        let items: Vec<ProductListItemDto> =
            rows.into_iter().map(ProductListItemDto::from_row).collect();

        Ok(PagedResult::new(
            items,
            filters.page_number,
            filters.page_size,
            total_count,
        ))
    }

    /// Per-category product counts under the current filters. The category
    /// predicate itself is left out so facet counts stay meaningful while a
    /// category filter is active.
    pub async fn facets(&self, filters: &ProductFilters, limit: i64) -> Result<Vec<CategoryFacet>> {
        let mut qb: QueryBuilder<sqlx::MySql> = QueryBuilder::new(
            "SELECT c.id AS category_id, c.name, c.slug, COUNT(DISTINCT p.id) AS product_count \
             FROM categories c \
             JOIN product_categories pc ON pc.category_id = c.id \
             JOIN products p ON p.id = pc.product_id",
        );
        push_search_predicates(&mut qb, filters, false);
        qb.push(" GROUP BY c.id, c.name, c.slug ORDER BY product_count DESC, c.name ASC LIMIT ");
        qb.push_bind(limit);

        let facets = qb
            .build_query_as::<CategoryFacetRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| CategoryFacet {
                category_id: r.category_id,
                name: r.name,
                slug: r.slug,
                product_count: r.product_count,
            })
            .collect();
        Ok(facets)
    }
}

#[derive(sqlx::FromRow)]
struct CategoryFacetRow {
    category_id: String,
    name: String,
    slug: String,
    product_count: i64,
}

/// Append the WHERE clause for a filter object. Every caller-supplied value
/// goes through `push_bind`. `with_categories` controls whether the
/// category-slug predicate is included (the facet query leaves it out).
fn push_search_predicates(
    qb: &mut QueryBuilder<'_, sqlx::MySql>,
    filters: &ProductFilters,
    with_categories: bool,
) {
    qb.push(" WHERE 1 = 1");

    if filters.active_only {
        qb.push(" AND p.is_active = 1");
    }
    if filters.in_stock_only {
        qb.push(" AND p.stock_quantity > 0");
    }

    let term = filters.search_query.trim();
    if !term.is_empty() {
        let pattern = format!("%{}%", term.to_lowercase());
        qb.push(" AND (LOWER(p.name) LIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR LOWER(p.sku) LIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR LOWER(p.description) LIKE ");
        qb.push_bind(pattern);
        qb.push(")");
    }

    if let Some(min) = filters.price_min {
        qb.push(" AND p.base_price >= ");
        qb.push_bind(min);
    }
    if let Some(max) = filters.price_max {
        qb.push(" AND p.base_price <= ");
        qb.push_bind(max);
    }

    if with_categories && !filters.category_slugs.is_empty() {
        qb.push(
            " AND EXISTS (SELECT 1 FROM product_categories pc2 \
             JOIN categories c2 ON c2.id = pc2.category_id \
             WHERE pc2.product_id = p.id AND c2.slug IN (",
        );
        let mut separated = qb.separated(", ");
        for slug in &filters.category_slugs {
            separated.push_bind(slug.clone());
        }
        qb.push("))");
    }

    for (attribute_name, values) in &filters.attribute_filters {
        if values.is_empty() {
            continue;
        }
        qb.push(
            " AND EXISTS (SELECT 1 FROM product_attributes pa2 \
             JOIN attributes a2 ON a2.id = pa2.attribute_id \
             WHERE pa2.product_id = p.id AND a2.name = ",
        );
        qb.push_bind(attribute_name.clone());
        qb.push(" AND JSON_UNQUOTE(pa2.value) IN (");
        let mut separated = qb.separated(", ");
        for value in values {
            separated.push_bind(value.clone());
        }
        qb.push("))");
    }
}
