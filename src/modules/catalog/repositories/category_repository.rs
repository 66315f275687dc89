use sqlx::MySqlPool;

use super::grid_exec::fetch_grid_rows;
use crate::core::datatable::{compose, DataTableRequest, DataTableResult, CATEGORY_GRID};
use crate::core::Result;
use crate::modules::catalog::models::{CategoryDto, CategoryGridRow};

pub struct CategoryReadRepository {
    pool: MySqlPool,
}

impl CategoryReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Serve a server-side grid request over categories
    pub async fn grid(&self, request: &DataTableRequest) -> Result<DataTableResult<CategoryDto>> {
        request.validate()?;
        let query = compose(request, &CATEGORY_GRID)?;
        let (total, filtered, rows) =
            fetch_grid_rows::<CategoryGridRow>(&self.pool, &query).await?;
        let data = rows.into_iter().map(CategoryDto::from_row).collect();
        Ok(DataTableResult::new(request.draw, total, filtered, data))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryDto>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE c.slug = ?",
            CATEGORY_GRID.select_clause, CATEGORY_GRID.from_clause
        );
        let row = sqlx::query_as::<_, CategoryGridRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(CategoryDto::from_row))
    }
}
