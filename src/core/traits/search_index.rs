use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;

/// Search-index collaborator. The index itself lives outside this crate;
/// callers only trigger rebuilds and single-document refreshes.
#[async_trait]
pub trait SearchIndexer: Send + Sync {
    /// Rebuild the whole product index from the relational store
    async fn rebuild(&self) -> Result<()>;

    /// Re-index a single product after a write
    async fn index_product(&self, product_id: Uuid) -> Result<()>;
}
