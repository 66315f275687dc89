pub mod cart;

pub use cart::{CartDto, CartItemDto, CartItemRow, CartRow};
