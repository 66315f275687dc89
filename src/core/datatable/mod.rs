//! Server-side grid queries: request contract, column registries, SQL
//! composition and result pages.

pub mod columns;
pub mod composer;
pub mod page;
pub mod request;

pub use columns::{ColumnDef, GridColumns, GridEntity, ATTRIBUTE_GRID, CATEGORY_GRID, PRODUCT_GRID};
pub use composer::{compose, ComposedQuery};
pub use page::{DataTableResult, PagedResult};
pub use request::{
    ColumnRequest, DataTableRequest, OrderSpec, SearchSpec, SortDirection, LENGTH_ALL,
};
