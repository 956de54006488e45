//! The static menu catalog and the in-memory menu filter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};
use crate::models::{CategoryFilter, MenuCategory, MenuItem};

const BUILTIN_MENU: &str = include_str!("../data/menu.json");

/// Ordered list of menu categories offered by the restaurant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// Decode the menu shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MENU)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).map_err(|source| StorefrontError::Decode {
            what: "menu catalog",
            source,
        })?;

        tracing::debug!(
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Total items across categories (items listed in several categories count once per listing)
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    /// Filtered copy of the catalog, see [`filter_categories`].
    pub fn filtered(&self, search: &str, filter: &CategoryFilter) -> Vec<MenuCategory> {
        filter_categories(&self.categories, search, filter)
    }
}

/// Narrow categories down to the items matching `search`.
///
/// Each category keeps only the items whose name or description contains
/// `search` verbatim. Categories left empty, or rejected by `filter`, are
/// dropped. Category and item order is preserved.
pub fn filter_categories(
    categories: &[MenuCategory],
    search: &str,
    filter: &CategoryFilter,
) -> Vec<MenuCategory> {
    categories
        .iter()
        .filter(|category| filter.admits(&category.id))
        .filter_map(|category| {
            let items: Vec<MenuItem> = category
                .items
                .iter()
                .filter(|item| item.matches(search))
                .cloned()
                .collect();

            (!items.is_empty()).then(|| MenuCategory {
                items,
                ..category.clone()
            })
        })
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_item() -> impl Strategy<Value = MenuItem> {
        ("[a-d]{1,3}", "[a-d ]{0,6}", proptest::option::of("[a-d ]{0,8}")).prop_map(
            |(id, name, description)| MenuItem {
                id,
                name,
                price: "1".to_string(),
                description,
                image: String::new(),
            },
        )
    }

    fn arb_categories() -> impl Strategy<Value = Vec<MenuCategory>> {
        proptest::collection::vec(
            ("[xyz]", proptest::collection::vec(arb_item(), 0..5)).prop_map(|(id, items)| {
                MenuCategory {
                    title: id.clone(),
                    icon: String::new(),
                    id,
                    items,
                }
            }),
            0..5,
        )
    }

    fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            "[xyz]".prop_map(CategoryFilter::Only),
        ]
    }

    proptest! {
        #[test]
        fn test_filtering_is_idempotent(
            categories in arb_categories(),
            search in "[a-d]{0,2}",
            filter in arb_filter(),
        ) {
            let once = filter_categories(&categories, &search, &filter);
            let twice = filter_categories(&once, &search, &filter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_filtered_items_all_match(
            categories in arb_categories(),
            search in "[a-d]{0,2}",
            filter in arb_filter(),
        ) {
            for category in filter_categories(&categories, &search, &filter) {
                prop_assert!(!category.items.is_empty());
                prop_assert!(filter.admits(&category.id));
                for item in &category.items {
                    prop_assert!(item.matches(&search));
                }
            }
        }
    }
}
