pub mod cart;
pub mod catalog;
pub mod identity;
pub mod orders;
pub mod search;
