//! Domain logic for the Rob3 Mashwy storefront.
//!
//! Everything here is browser-independent: the UI crate owns the DOM and
//! only calls into these types.

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod location;
pub mod models;
pub mod pricing;
pub mod profile;
pub mod state;
pub mod theme;

pub use catalog::{filter_categories, Catalog};
pub use checkout::{whatsapp_link, CartCheckout, QuickOrder};
pub use error::{CheckoutError, LocationError, StorefrontError};
pub use pricing::PriceTag;
pub use profile::StoreProfile;
pub use state::Cart;
pub use theme::{MemoryStore, PreferenceStore, Theme};
