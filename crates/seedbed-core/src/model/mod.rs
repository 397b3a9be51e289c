mod customer;
mod order;
mod order_item;
mod product;
mod row;

pub use self::customer::Customer;
pub use self::order::Order;
pub use self::order_item::OrderItem;
pub use self::product::Product;
pub use self::row::{TableRows, Value};
