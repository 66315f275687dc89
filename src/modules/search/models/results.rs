use serde::Serialize;

use crate::core::datatable::PagedResult;
use crate::modules::catalog::models::ProductListItemDto;

/// Per-category product count returned alongside results to drive filter UIs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFacet {
    pub category_id: String,
    pub name: String,
    pub slug: String,
    pub product_count: i64,
}

/// One page of search hits plus facet counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchPage {
    pub products: PagedResult<ProductListItemDto>,
    pub facets: Vec<CategoryFacet>,
}
