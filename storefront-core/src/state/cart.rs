use crate::models::{CartEntry, CartEntryId, MenuItem};

/// Pending order lines for one browsing session.
///
/// Every add creates a new entry, even for an item already in the cart, so
/// different notes stay separate. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    next_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item` as a new entry and return its id.
    ///
    /// A zero quantity is raised to 1; a blank note is stored as `None`.
    pub fn add(&mut self, item: MenuItem, quantity: u32, note: impl Into<String>) -> CartEntryId {
        self.next_id += 1;
        let id = CartEntryId(self.next_id);

        let note = note.into();
        let note = (!note.trim().is_empty()).then_some(note);

        tracing::debug!(%id, item = %item.id, quantity, "Adding cart entry");

        self.entries.push(CartEntry {
            id,
            item,
            quantity: quantity.max(1),
            note,
        });
        id
    }

    /// Remove exactly the entry with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: CartEntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;

        tracing::debug!(%id, removed, "Removing cart entry");
        removed
    }

    /// Apply `delta` to the quantity of entry `id`, never going below 1.
    ///
    /// Returns the new quantity, or `None` when no such entry exists.
    pub fn update_quantity(&mut self, id: CartEntryId, delta: i32) -> Option<u32> {
        let entry = self.entries.iter_mut().find(|entry| entry.id == id)?;

        let updated = i64::from(entry.quantity) + i64::from(delta);
        entry.quantity = u32::try_from(updated.max(1)).unwrap_or(u32::MAX);

        tracing::debug!(%id, delta, quantity = entry.quantity, "Updated cart quantity");
        Some(entry.quantity)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, id: CartEntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities, shown on the cart badge
    pub fn total_items(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |acc, entry| acc.saturating_add(entry.quantity))
    }

    /// Estimated total: first price number times quantity, summed.
    pub fn estimated_total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.line_total()))
    }

    /// Drop all entries. Ids keep increasing so they stay unique for the session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, price: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("item {id}"),
            price: price.to_string(),
            description: None,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_creates_separate_entries_per_note() {
        let mut cart = Cart::new();
        let kofta = menu_item("g3", "85 - 280");

        let a = cart.add(kofta.clone(), 1, "بدون بصل");
        let b = cart.add(kofta, 1, "زيادة عيش");

        assert_ne!(a, b);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(a).unwrap().note.as_deref(), Some("بدون بصل"));
        assert_eq!(cart.get(b).unwrap().note.as_deref(), Some("زيادة عيش"));
    }

    #[test]
    fn test_add_identical_items_does_not_merge() {
        let mut cart = Cart::new();
        cart.add(menu_item("h1", "15"), 2, "");
        cart.add(menu_item("h1", "15"), 2, "");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_blank_note_is_none_and_zero_quantity_is_raised() {
        let mut cart = Cart::new();
        let id = cart.add(menu_item("h1", "15"), 0, "   ");
        let entry = cart.get(id).unwrap();
        assert!(entry.note.is_none());
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn test_remove_only_the_target_entry() {
        let mut cart = Cart::new();
        let a = cart.add(menu_item("a", "10"), 1, "");
        let b = cart.add(menu_item("b", "20"), 1, "");
        let c = cart.add(menu_item("c", "30"), 1, "");

        assert!(cart.remove(b));
        let ids: Vec<_> = cart.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);

        assert!(!cart.remove(b));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let mut cart = Cart::new();
        let id = cart.add(menu_item("a", "10"), 2, "");

        assert_eq!(cart.update_quantity(id, 1), Some(3));
        assert_eq!(cart.update_quantity(id, -1), Some(2));
        assert_eq!(cart.update_quantity(id, -1), Some(1));
        assert_eq!(cart.update_quantity(id, -1), Some(1));
        assert_eq!(cart.update_quantity(id, -50), Some(1));
    }

    #[test]
    fn test_update_unknown_entry_is_none() {
        let mut cart = Cart::new();
        assert_eq!(cart.update_quantity(CartEntryId(42), 1), None);
    }

    #[test]
    fn test_estimated_total_uses_first_price_number() {
        let mut cart = Cart::new();
        cart.add(menu_item("g3", "85 - 280"), 2, "");
        cart.add(menu_item("g1", "120"), 1, "");
        cart.add(menu_item("c3", "0"), 3, "");

        assert_eq!(cart.estimated_total(), 85 * 2 + 120);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn test_ids_stay_unique_after_clear() {
        let mut cart = Cart::new();
        let first = cart.add(menu_item("a", "1"), 1, "");
        cart.clear();
        assert!(cart.is_empty());

        let second = cart.add(menu_item("a", "1"), 1, "");
        assert_ne!(first, second);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_quantity_never_below_one(
            start in 1u32..20,
            deltas in proptest::collection::vec(-10i32..10, 0..50),
        ) {
            let mut cart = Cart::new();
            let id = cart.add(
                MenuItem {
                    id: "x".to_string(),
                    name: "x".to_string(),
                    price: "5".to_string(),
                    description: None,
                    image: String::new(),
                },
                start,
                "",
            );

            for delta in deltas {
                let quantity = cart.update_quantity(id, delta).unwrap();
                prop_assert!(quantity >= 1);
            }
        }

        #[test]
        fn test_entry_ids_are_unique(adds in 1usize..40) {
            let mut cart = Cart::new();
            let mut ids = Vec::new();
            for i in 0..adds {
                ids.push(cart.add(
                    MenuItem {
                        id: i.to_string(),
                        name: String::new(),
                        price: String::new(),
                        description: None,
                        image: String::new(),
                    },
                    1,
                    "",
                ));
            }
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), adds);
        }
    }
}
