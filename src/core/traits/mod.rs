pub mod cache;
pub mod search_index;

pub use cache::CacheInvalidator;
pub use search_index::SearchIndexer;
