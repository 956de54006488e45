pub mod cart_entry;
pub mod menu;
pub mod order;

pub use cart_entry::{CartEntry, CartEntryId};
pub use menu::{CategoryFilter, MenuCategory, MenuItem};
pub use order::{DeliveryTime, OrderType};
