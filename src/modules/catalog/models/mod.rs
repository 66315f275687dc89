pub mod attribute;
pub mod category;
pub mod product;

pub use attribute::{AttributeDto, AttributeGridRow, AttributeType};
pub use category::{CategoryDto, CategoryGridRow};
pub use product::{
    ImageDto, ProductAttributeDto, ProductCategoryDto, ProductGridRow, ProductListItemDto,
    VariantDto,
};
