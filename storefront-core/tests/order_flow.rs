//! Integration tests for the browse → cart → checkout flow
//!
//! These tests drive the public API against the built-in catalog and profile,
//! the same data the storefront ships with.

use storefront_core::checkout::encode_uri_component;
use storefront_core::models::{CategoryFilter, MenuItem, OrderType};
use storefront_core::location::{append_location, append_location_padded};
use storefront_core::{Cart, CartCheckout, Catalog, CheckoutError, QuickOrder, StoreProfile};

/// Helper to find an item in the built-in catalog
fn find_item(catalog: &Catalog, category: &str, id: &str) -> MenuItem {
    catalog
        .category(category)
        .and_then(|c| c.items.iter().find(|item| item.id == id))
        .cloned()
        .expect("item missing from built-in catalog")
}

#[test]
fn test_search_then_add_then_checkout() {
    let catalog = Catalog::builtin().unwrap();
    let profile = StoreProfile::builtin().unwrap();

    // Customer narrows the grill section down to the kofta
    let results = catalog.filtered("كفتة مشوية", &CategoryFilter::Only("grill".to_string()));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].items.len(), 1);
    let kofta = results[0].items[0].clone();

    let mut cart = Cart::new();
    let first = cart.add(kofta.clone(), 1, "بدون بصل");
    cart.add(kofta, 2, "حار");
    cart.add(find_item(&catalog, "cold-drinks", "c3"), 3, "");

    // Bump the first entry and try to push the water below one
    assert_eq!(cart.update_quantity(first, 1), Some(2));
    let water = cart.entries()[2].id;
    assert_eq!(cart.update_quantity(water, -5), Some(3));

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.total_items(), 7);
    // 85 per kofta unit, water is free
    assert_eq!(cart.estimated_total(), 85 * 4);

    let mut checkout = CartCheckout::new(OrderType::Delivery, "");
    assert_eq!(
        checkout.link(&cart, &profile),
        Err(CheckoutError::MissingAddress)
    );

    checkout.address = "الحي الثامن".to_string();
    let link = checkout.link(&cart, &profile).unwrap();

    assert!(link.starts_with("https://wa.me/201141345223?text="));
    assert!(link.contains(&encode_uri_component("*الإجمالي التقديري:* 340 جنيه")));
    assert!(link.contains(&encode_uri_component("*العنوان:* الحي الثامن")));
}

#[test]
fn test_remove_leaves_other_entries_untouched() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = Cart::new();

    let tea = cart.add(find_item(&catalog, "hot-drinks", "h1"), 1, "");
    let coffee = cart.add(find_item(&catalog, "hot-drinks", "h2"), 1, "سادة");
    let om_ali = cart.add(find_item(&catalog, "desserts", "d2"), 2, "");

    assert!(cart.remove(coffee));

    let remaining: Vec<_> = cart.entries().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![tea, om_ali]);
    assert_eq!(cart.estimated_total(), 15 + 45 * 2);
}

#[test]
fn test_takeaway_checkout_proceeds_without_address() {
    let catalog = Catalog::builtin().unwrap();
    let profile = StoreProfile::builtin().unwrap();
    let mut cart = Cart::new();
    cart.add(find_item(&catalog, "meals", "m1"), 1, "");

    let message = CartCheckout::new(OrderType::Takeaway, "")
        .message(&cart, &profile.currency_long)
        .unwrap();

    assert!(message.contains("1. *1x وجبة التوفير*"));
    assert!(message.ends_with("يرجى تأكيد الطلب."));
}

#[test]
fn test_search_with_no_matches_is_empty_not_an_error() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.filtered("بيتزا", &CategoryFilter::All).is_empty());
}

#[test]
fn test_quick_order_and_cart_word_missing_address_differently() {
    let catalog = Catalog::builtin().unwrap();
    let item = find_item(&catalog, "meals", "m1");

    let quick = QuickOrder::new(item.clone());
    let quick_err = quick.validate().unwrap_err();
    assert_eq!(quick_err, CheckoutError::MissingDeliveryAddress);

    let mut cart = Cart::new();
    cart.add(item, 1, "");
    let cart_err = CartCheckout::new(OrderType::Delivery, "").validate(&cart).unwrap_err();
    assert_eq!(cart_err, CheckoutError::MissingAddress);

    assert_ne!(quick_err.to_string(), cart_err.to_string());
}

#[test]
fn test_located_address_feeds_quick_order_message() {
    let catalog = Catalog::builtin().unwrap();
    let profile = StoreProfile::builtin().unwrap();

    let mut order = QuickOrder::new(find_item(&catalog, "meals", "m1"));
    order.address = append_location_padded("شارع النصر", "https://maps.google.com/?q=1,2");
    assert_eq!(order.address, "شارع النصر \n📍 https://maps.google.com/?q=1,2");

    let message = order.message(&profile.currency_long).unwrap();
    assert!(message.contains("شارع النصر \n📍 https://maps.google.com/?q=1,2"));

    // cart drawer form has no padding
    assert_eq!(append_location("شارع النصر", "L"), "شارع النصر\n📍 L");
}
