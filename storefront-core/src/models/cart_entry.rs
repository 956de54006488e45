use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// Session-unique handle for one cart line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartEntryId(pub u64);

impl fmt::Display for CartEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cart-{}", self.0)
    }
}

/// One add-to-cart action: a menu item with its own quantity and note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    pub id: CartEntryId,
    pub item: MenuItem,
    /// Always >= 1
    pub quantity: u32,
    pub note: Option<String>,
}

impl CartEntry {
    /// Contribution of this line to the estimated cart total
    pub fn line_total(&self) -> u64 {
        self.item.price_tag().line_amount(self.quantity)
    }
}
