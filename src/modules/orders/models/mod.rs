pub mod order;

pub use order::{OrderDto, OrderItemDto, OrderItemRow, OrderRow, OrderStatus, PaymentStatus};
