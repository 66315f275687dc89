use async_trait::async_trait;

use crate::core::Result;

/// Cache invalidation collaborator keyed by string patterns
/// (e.g. `"search:*"`, `"product:{id}"`)
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate all entries matching `pattern`, returning how many were
    /// removed
    async fn invalidate(&self, pattern: &str) -> Result<u64>;
}
