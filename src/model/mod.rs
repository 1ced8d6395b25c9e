//! Pure data structures: the editable line items and the order built from them.

pub mod menu;
pub mod order;
pub mod order_item;

pub use menu::*;
pub use order::*;
pub use order_item::*;
