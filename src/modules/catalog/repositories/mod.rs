mod grid_exec;

pub mod attribute_repository;
pub mod category_repository;
pub mod product_repository;

pub use attribute_repository::AttributeReadRepository;
pub use category_repository::CategoryReadRepository;
pub use product_repository::ProductReadRepository;
