use std::sync::Arc;

use uuid::Uuid;

use crate::config::SearchConfig;
use crate::core::traits::{CacheInvalidator, SearchIndexer};
use crate::core::{AppError, Result};
use crate::modules::catalog::repositories::ProductReadRepository;
use crate::modules::search::models::{codec, ProductFilters, ProductSearchPage};

/// Paginated, faceted product search plus index maintenance triggers
pub struct SearchService {
    products: Arc<ProductReadRepository>,
    indexer: Arc<dyn SearchIndexer>,
    cache: Arc<dyn CacheInvalidator>,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(
        products: Arc<ProductReadRepository>,
        indexer: Arc<dyn SearchIndexer>,
        cache: Arc<dyn CacheInvalidator>,
        config: SearchConfig,
    ) -> Self {
        Self {
            products,
            indexer,
            cache,
            config,
        }
    }

    /// Decode a `FiltersBase64` blob and run the search. Transport decoding
    /// failures surface as client errors before any validation runs.
    pub async fn search_encoded(&self, blob: &str) -> Result<ProductSearchPage> {
        let filters = codec::decode(blob)?;
        self.search(filters).await
    }

    /// Run a validated product search and gather facet counts
    pub async fn search(&self, filters: ProductFilters) -> Result<ProductSearchPage> {
        filters.validate()?;
        if filters.page_size > self.config.max_page_size {
            return Err(AppError::validation_field(
                "Search.PageSizeTooLarge",
                format!("Page size must not exceed {}", self.config.max_page_size),
                "pageSize",
                format!("got {}", filters.page_size),
            ));
        }

        let products = self
            .products
            .search(&filters)
            .await
            .map_err(|e| e.or_feature_failure("Search"))?;
        let facets = self
            .products
            .facets(&filters, self.config.facet_limit)
            .await
            .map_err(|e| e.or_feature_failure("Search"))?;

        Ok(ProductSearchPage { products, facets })
    }

    /// Trigger a full index rebuild, then drop cached search pages
    pub async fn rebuild_index(&self) -> Result<()> {
        self.indexer
            .rebuild()
            .await
            .map_err(|e| e.or_feature_failure("SearchReindex"))?;
        let dropped = self
            .cache
            .invalidate("search:*")
            .await
            .map_err(|e| e.or_feature_failure("SearchReindex"))?;
        tracing::info!(dropped, "search index rebuilt, cached pages invalidated");
        Ok(())
    }

    /// Refresh a single product document after a write
    pub async fn reindex_product(&self, product_id: Uuid) -> Result<()> {
        self.indexer
            .index_product(product_id)
            .await
            .map_err(|e| e.or_feature_failure("SearchReindex"))?;
        self.cache
            .invalidate(&format!("product:{}", product_id))
            .await
            .map_err(|e| e.or_feature_failure("SearchReindex"))?;
        Ok(())
    }
}
