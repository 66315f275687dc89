//! Shopilent e-commerce application layer.
//!
//! Read-model repositories with DataTable-style grid queries, the base64
//! filter codec and faceted product search, and account command handlers
//! with pipeline-style validation.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::cart;
pub use modules::catalog;
pub use modules::identity;
pub use modules::orders;
pub use modules::search;
