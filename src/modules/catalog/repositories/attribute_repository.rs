use sqlx::MySqlPool;

use super::grid_exec::fetch_grid_rows;
use crate::core::datatable::{compose, DataTableRequest, DataTableResult, ATTRIBUTE_GRID};
use crate::core::Result;
use crate::modules::catalog::models::{AttributeDto, AttributeGridRow};

pub struct AttributeReadRepository {
    pool: MySqlPool,
}

impl AttributeReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Serve a server-side grid request over attributes
    pub async fn grid(&self, request: &DataTableRequest) -> Result<DataTableResult<AttributeDto>> {
        request.validate()?;
        let query = compose(request, &ATTRIBUTE_GRID)?;
        let (total, filtered, rows) =
            fetch_grid_rows::<AttributeGridRow>(&self.pool, &query).await?;
        let data = rows.into_iter().map(AttributeDto::from_row).collect();
        Ok(DataTableResult::new(request.draw, total, filtered, data))
    }

    /// Attributes flagged filterable, for building facet UIs
    pub async fn list_filterable(&self) -> Result<Vec<AttributeDto>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE a.is_filterable = 1 ORDER BY a.name",
            ATTRIBUTE_GRID.select_clause, ATTRIBUTE_GRID.from_clause
        );
        let rows = sqlx::query_as::<_, AttributeGridRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AttributeDto::from_row).collect())
    }
}
