pub mod datatable;
pub mod error;
pub mod json;
pub mod traits;

pub use error::{AppError, Result};
