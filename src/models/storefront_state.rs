use leptos::prelude::*;
use send_wrapper::SendWrapper;
use storefront_core::models::{CartEntryId, CategoryFilter, MenuCategory, MenuItem};
use storefront_core::{Cart, Catalog, StoreProfile, Theme};

use crate::platform::{browser, LocalStorageStore};

/// Frontend-only reactive state (Leptos signals).
/// Shared state accessible to all components via `use_context()`.
#[derive(Clone, Copy)]
pub struct StorefrontState {
    /// Static menu, loaded once at startup
    pub catalog: StoredValue<Catalog>,
    /// Branding and messaging recipient
    pub profile: StoredValue<StoreProfile>,
    /// Category pill currently selected
    pub active_category: RwSignal<CategoryFilter>,
    /// Text typed in the menu search bar
    pub search_term: RwSignal<String>,
    pub cart: RwSignal<Cart>,
    pub is_cart_open: RwSignal<bool>,
    pub is_dark: RwSignal<bool>,
    /// Splash screen still showing?
    pub is_loading: RwSignal<bool>,
    /// Active notification (if any)
    pub notification: RwSignal<Option<String>>,
    /// `localStorage` is not `Send`, hence the wrapper
    preferences: StoredValue<Option<SendWrapper<LocalStorageStore>>>,
}

impl StorefrontState {
    /// Create the state, reading the stored theme preference once.
    pub fn new(catalog: Catalog, profile: StoreProfile) -> Self {
        let preferences = LocalStorageStore::open();
        let system_dark = browser::prefers_dark_scheme();
        let theme = preferences.as_ref().map_or_else(
            || Theme::from_dark(system_dark),
            |store| Theme::load(store, system_dark),
        );

        tracing::debug!(theme = theme.as_str(), "Initial theme resolved");

        Self {
            catalog: StoredValue::new(catalog),
            profile: StoredValue::new(profile),
            active_category: RwSignal::new(CategoryFilter::All),
            search_term: RwSignal::new(String::new()),
            cart: RwSignal::new(Cart::new()),
            is_cart_open: RwSignal::new(false),
            is_dark: RwSignal::new(theme.is_dark()),
            is_loading: RwSignal::new(true),
            notification: RwSignal::new(None),
            preferences: StoredValue::new(preferences.map(SendWrapper::new)),
        }
    }

    /// Categories and items passing the current search and category filter
    pub fn filtered_menu(&self) -> Vec<MenuCategory> {
        let filter = self.active_category.get();
        self.search_term
            .with(|search| self.catalog.with_value(|catalog| catalog.filtered(search, &filter)))
    }

    pub fn select_category(&self, filter: CategoryFilter) {
        self.active_category.set(filter);
    }

    pub fn clear_search(&self) {
        self.search_term.set(String::new());
    }

    pub fn add_to_cart(&self, item: MenuItem, quantity: u32, note: String) -> CartEntryId {
        let mut id = CartEntryId(0);
        self.cart.update(|cart| id = cart.add(item, quantity, note));
        id
    }

    pub fn remove_from_cart(&self, id: CartEntryId) {
        self.cart.update(|cart| {
            cart.remove(id);
        });
    }

    pub fn update_quantity(&self, id: CartEntryId, delta: i32) {
        self.cart.update(|cart| {
            cart.update_quantity(id, delta);
        });
    }

    /// Total quantity for the header badge
    pub fn cart_count(&self) -> u32 {
        self.cart.with(Cart::total_items)
    }

    pub fn open_cart(&self) {
        self.is_cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.is_cart_open.set(false);
    }

    pub fn toggle_theme(&self) {
        self.is_dark.update(|dark| *dark = !*dark);
    }

    /// Apply the theme to the document and remember it.
    pub fn apply_theme(&self, is_dark: bool) {
        browser::set_dark_class(is_dark);

        self.preferences.with_value(|store| {
            if let Some(store) = store {
                if let Err(e) = Theme::from_dark(is_dark).save(&**store) {
                    tracing::warn!("Failed to persist theme: {e}");
                }
            }
        });
    }

    /// Show a notification (auto-dismiss should be handled by component)
    pub fn show_notification(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    /// Clear the current notification
    pub fn clear_notification(&self) {
        self.notification.set(None);
    }
}
