pub mod codec;
pub mod filters;
pub mod results;

pub use codec::{decode, encode, FilterDecodeError};
pub use filters::ProductFilters;
pub use results::{CategoryFacet, ProductSearchPage};
