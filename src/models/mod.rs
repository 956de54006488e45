pub mod storefront_state;

pub use storefront_state::StorefrontState;
