use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::cart::models::{CartDto, CartItemRow, CartRow};

pub struct CartReadRepository {
    pool: MySqlPool,
}

impl CartReadRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The user's open cart with its items, if one exists. A user has at
    /// most one cart with no order attached.
    pub async fn find_active_for_user(&self, user_id: &str) -> Result<Option<CartDto>> {
        let cart = sqlx::query_as::<_, CartRow>(
            "SELECT id, user_id, CAST(metadata AS CHAR) AS metadata_json, \
                    created_at, updated_at \
             FROM carts WHERE user_id = ? AND checked_out_at IS NULL \
             ORDER BY updated_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let cart = match cart {
            Some(c) => c,
            None => return Ok(None),
        };

        let items = sqlx::query_as::<_, CartItemRow>(
            "SELECT id, product_id, variant_id, quantity, unit_price, \
                    CAST(product_snapshot AS CHAR) AS product_snapshot_json \
             FROM cart_items WHERE cart_id = ? ORDER BY created_at",
        )
        .bind(&cart.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(CartDto::from_rows(cart, items)))
    }
}
