//! Shared execution path for composed grid statements.

use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySqlPool};

use crate::core::datatable::ComposedQuery;
use crate::core::Result;

/// Run the three composed statements: unfiltered count, filtered count and
/// the page select. The filtered count and the page share bind values, so
/// both see the identical predicate.
pub(crate) async fn fetch_grid_rows<R>(
    pool: &MySqlPool,
    query: &ComposedQuery,
) -> Result<(i64, i64, Vec<R>)>
where
    R: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let records_total: i64 = sqlx::query_scalar(&query.count_total_sql)
        .fetch_one(pool)
        .await?;

    let mut filtered = sqlx::query_scalar(&query.count_filtered_sql);
    for param in &query.where_params {
        filtered = filtered.bind(param.as_str());
    }
    let records_filtered: i64 = filtered.fetch_one(pool).await?;

    let mut page = sqlx::query_as::<_, R>(&query.page_sql);
    for param in &query.where_params {
        page = page.bind(param.as_str());
    }
    for param in &query.page_params {
        page = page.bind(*param);
    }
    let rows = page.fetch_all(pool).await?;

    Ok((records_total, records_filtered, rows))
}
