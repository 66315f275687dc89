//! Pure SQL composition for grid requests.
//!
//! The composer is a function of (request, registry) -> statements; it owns
//! no state and touches no connection. User-supplied text only ever becomes
//! bind parameters. Sort descriptors that reference an out-of-range column
//! index or a non-orderable column fall back to the registry's default sort
//! instead of failing the request.

use super::columns::GridColumns;
use super::request::{DataTableRequest, LENGTH_ALL};
use crate::core::{AppError, Result};

/// Composed statements for one grid request. `count_filtered_sql` and
/// `page_sql` share the identical WHERE clause; `count_total_sql` is
/// unfiltered.
#[derive(Debug, Clone)]
pub struct ComposedQuery {
    pub count_total_sql: String,
    pub count_filtered_sql: String,
    pub page_sql: String,
    /// Bind values for the WHERE clause, in placeholder order
    pub where_params: Vec<String>,
    /// Bind values appended after the WHERE params on the page statement
    /// (LIMIT/OFFSET), empty when the request asked for all rows
    pub page_params: Vec<i64>,
}

/// Build count and page statements for `request` against `grid`.
///
/// Offsets and lengths are used verbatim; negative values are rejected by
/// [`DataTableRequest::validate`] upstream, not clamped here.
pub fn compose(request: &DataTableRequest, grid: &GridColumns) -> Result<ComposedQuery> {
    if grid.columns.is_empty() {
        return Err(AppError::Configuration(format!(
            "No grid columns registered for entity '{}'",
            grid.entity
        )));
    }

    let (where_clause, where_params) = build_where(request, grid);
    let order_clause = build_order(request, grid);

    let count_total_sql = format!("SELECT COUNT(*) FROM {}", grid.from_clause);
    let count_filtered_sql = format!(
        "SELECT COUNT(*) FROM {}{}",
        grid.from_clause, where_clause
    );

    let mut page_sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        grid.select_clause, grid.from_clause, where_clause, order_clause
    );
    let mut page_params = Vec::new();
    if request.length != LENGTH_ALL {
        page_sql.push_str(" LIMIT ? OFFSET ?");
        page_params.push(request.length);
        page_params.push(request.start);
    }

    Ok(ComposedQuery {
        count_total_sql,
        count_filtered_sql,
        page_sql,
        where_params,
        page_params,
    })
}

/// OR-joined case-insensitive substring predicates over every searchable
/// column, wrapped once in parentheses. One bind value per column.
fn build_where(request: &DataTableRequest, grid: &GridColumns) -> (String, Vec<String>) {
    let term = match request.search_term() {
        Some(t) => t,
        None => return (String::new(), Vec::new()),
    };

    let predicates: Vec<String> = grid
        .searchable()
        .map(|c| format!("LOWER({}) LIKE ?", c.physical))
        .collect();
    if predicates.is_empty() {
        return (String::new(), Vec::new());
    }

    let pattern = format!("%{}%", term.to_lowercase());
    let params = vec![pattern; predicates.len()];
    (format!(" WHERE ({})", predicates.join(" OR ")), params)
}

/// Requested sort pairs in request order; each unusable pair degrades to the
/// default sort ascending. An empty order list sorts by the default alone.
fn build_order(request: &DataTableRequest, grid: &GridColumns) -> String {
    if request.order.is_empty() {
        return format!("{} ASC", grid.default_sort);
    }

    let keys: Vec<String> = request
        .order
        .iter()
        .map(|spec| {
            let usable = request
                .columns
                .get(spec.column)
                .and_then(|col| grid.columns.iter().find(|c| c.key == col.data))
                .filter(|c| c.orderable);
            match usable {
                Some(c) => format!("{} {}", c.physical, spec.dir.as_sql()),
                None => format!("{} ASC", grid.default_sort),
            }
        })
        .collect();

    keys.join(", ")
}
