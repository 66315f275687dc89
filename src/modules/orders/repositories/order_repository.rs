use sqlx::MySqlPool;

use crate::core::datatable::PagedResult;
use crate::core::{AppError, Result};
use crate::modules::orders::models::{OrderDto, OrderItemRow, OrderRow};

const ORDER_SELECT: &str = "SELECT id, user_id, status, payment_status, subtotal, tax, \
     shipping_cost, total, CAST(metadata AS CHAR) AS metadata_json, \
     created_at, updated_at FROM orders";

const ORDER_ITEM_SELECT: &str = "SELECT id, product_id, variant_id, quantity, unit_price, \
     total_price, CAST(product_snapshot AS CHAR) AS product_snapshot_json \
     FROM order_items WHERE order_id = ? ORDER BY created_at";

pub struct OrderReadRepository {
    pool: MySqlPool,
}

impl OrderReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, order_id: &str) -> Result<Option<OrderDto>> {
        let sql = format!("{} WHERE id = ?", ORDER_SELECT);
        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await?;

        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        let items = sqlx::query_as::<_, OrderItemRow>(ORDER_ITEM_SELECT)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(Some(OrderDto::from_rows(row, items)))
    }

    /// A user's orders, newest first. Page arguments are 1-based and
    /// rejected (not clamped) when out of range.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        page_number: i64,
        page_size: i64,
    ) -> Result<PagedResult<OrderDto>> {
        if page_number < 1 {
            return Err(AppError::validation_field(
                "Order.InvalidPageNumber",
                "Page number must be at least 1",
                "pageNumber",
                format!("got {}", page_number),
            ));
        }
        if page_size < 1 {
            return Err(AppError::validation_field(
                "Order.InvalidPageSize",
                "Page size must be at least 1",
                "pageSize",
                format!("got {}", page_size),
            ));
        }

        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let sql = format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, id ASC LIMIT ? OFFSET ?",
            ORDER_SELECT
        );
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(user_id)
            .bind(page_size)
            .bind((page_number - 1) * page_size)
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = sqlx::query_as::<_, OrderItemRow>(ORDER_ITEM_SELECT)
                .bind(&row.id)
                .fetch_all(&self.pool)
                .await?;
            orders.push(OrderDto::from_rows(row, items));
        }

        Ok(PagedResult::new(orders, page_number, page_size, total_count))
    }
}
