use serde::{Deserialize, Serialize};

use crate::pricing::PriceTag;

/// A single dish on the menu. Immutable once loaded from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Free text: a fixed price ("120") or a weight range ("85 - 280").
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
}

impl MenuItem {
    /// Parsed view of the free-text price
    pub fn price_tag(&self) -> PriceTag {
        PriceTag::parse(&self.price)
    }

    /// Literal, case-sensitive substring match against name or description.
    /// An empty needle matches every item.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.contains(needle))
    }
}

/// A titled group of menu items, rendered as one section of the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub title: String,
    /// Symbolic icon name; the UI maps it to a glyph.
    pub icon: String,
    pub items: Vec<MenuItem>,
}

/// Which categories the menu grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Check whether a category id passes this filter
    pub fn admits(&self, category_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category_id,
        }
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        matches!(self, Self::Only(id) if id == category_id)
    }
}
