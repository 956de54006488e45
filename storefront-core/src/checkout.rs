//! Order hand-off: validation, message text and the `wa.me` deep link.
//!
//! There is no backend. An order is a fixed-template text block that the
//! customer sends to the restaurant through their own messaging client.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CheckoutError;
use crate::models::{DeliveryTime, MenuItem, OrderType};
use crate::profile::StoreProfile;
use crate::state::Cart;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const RULE: &str = "----------------------------\n";

/// Percent-encode text the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Build a `wa.me` link that opens a chat with `recipient` pre-filled with `text`.
pub fn whatsapp_link(recipient: &str, text: &str) -> String {
    format!(
        "https://wa.me/{recipient}?text={}",
        encode_uri_component(text)
    )
}

fn require_address(
    order_type: OrderType,
    address: &str,
    missing: CheckoutError,
) -> Result<(), CheckoutError> {
    if order_type.requires_address() && address.trim().is_empty() {
        return Err(missing);
    }
    Ok(())
}

/// Checkout of the whole cart from the cart drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartCheckout {
    pub order_type: OrderType,
    pub address: String,
}

impl CartCheckout {
    pub fn new(order_type: OrderType, address: impl Into<String>) -> Self {
        Self {
            order_type,
            address: address.into(),
        }
    }

    pub fn validate(&self, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        require_address(self.order_type, &self.address, CheckoutError::MissingAddress)
    }

    /// Order summary text for the current cart.
    pub fn message(&self, cart: &Cart, currency: &str) -> Result<String, CheckoutError> {
        self.validate(cart)?;

        let mut message = String::from("*طلب جديد من السلة 🛍️*\n");
        message.push_str(RULE);
        message.push_str(&format!(
            "*النوع:* {}\n",
            self.order_type.cart_message_label()
        ));

        for (index, entry) in cart.entries().iter().enumerate() {
            message.push_str(&format!(
                "\n{}. *{}x {}*",
                index + 1,
                entry.quantity,
                entry.item.name
            ));
            if let Some(note) = &entry.note {
                message.push_str(&format!("\n   📝 ملاحظة: {note}"));
            }
        }

        message.push_str("\n\n");
        message.push_str(RULE);
        message.push_str(&format!(
            "*الإجمالي التقديري:* {} {currency}\n",
            cart.estimated_total()
        ));

        let address = self.address.trim();
        if self.order_type.requires_address() && !address.is_empty() {
            message.push_str(&format!("*العنوان:* {address}\n"));
        }

        message.push_str(RULE);
        message.push_str("يرجى تأكيد الطلب.");
        Ok(message)
    }

    /// Validated deep link for the cart order.
    pub fn link(&self, cart: &Cart, profile: &StoreProfile) -> Result<String, CheckoutError> {
        let message = self.message(cart, &profile.currency_long)?;
        tracing::info!(
            order_type = ?self.order_type,
            entries = cart.len(),
            total = cart.estimated_total(),
            "Cart checkout ready"
        );
        Ok(whatsapp_link(&profile.whatsapp_number, &message))
    }
}

/// Direct order of a single menu item, bypassing the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOrder {
    pub item: MenuItem,
    pub quantity: u32,
    pub order_type: OrderType,
    pub address: String,
    pub delivery_time: DeliveryTime,
    pub note: String,
}

impl QuickOrder {
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            order_type: OrderType::default(),
            address: String::new(),
            delivery_time: DeliveryTime::default(),
            note: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), CheckoutError> {
        require_address(
            self.order_type,
            &self.address,
            CheckoutError::MissingDeliveryAddress,
        )
    }

    /// Order text for this single item.
    pub fn message(&self, currency: &str) -> Result<String, CheckoutError> {
        self.validate()?;

        let quantity = self.quantity.max(1);
        let total = self.item.price_tag().display_total(quantity);

        let mut message = String::from("*طلب جديد من الموقع 🍗*\n");
        message.push_str(RULE);
        message.push_str(&format!(
            "*النوع:* {}\n",
            self.order_type.quick_message_label()
        ));
        message.push_str(&format!("*الطلب:* {quantity}x {}\n", self.item.name));
        message.push_str(&format!("*السعر الإجمالي:* {total} {currency}\n"));

        if self.order_type.requires_address() {
            let address = self.address.trim();
            if !address.is_empty() {
                message.push_str(&format!("*العنوان:* {address}\n"));
            }
            message.push_str(&format!("*وقت التوصيل:* {}\n", self.delivery_time.label()));
        }

        let note = self.note.trim();
        if !note.is_empty() {
            message.push_str(&format!("*ملاحظات:* {note}\n"));
        }

        message.push_str(RULE);
        message.push_str("يرجى تأكيد الاستلام.");
        Ok(message)
    }

    pub fn link(&self, profile: &StoreProfile) -> Result<String, CheckoutError> {
        let message = self.message(&profile.currency_long)?;
        tracing::info!(
            item = %self.item.id,
            quantity = self.quantity,
            order_type = ?self.order_type,
            "Quick order ready"
        );
        Ok(whatsapp_link(&profile.whatsapp_number, &message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, name: &str, price: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            description: None,
            image: String::new(),
        }
    }

    #[test]
    fn test_encode_uri_component_matches_browser() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("*x*\n"), "*x*%0A");
        assert_eq!(encode_uri_component("(1)!~'._-"), "(1)!~'._-");
        assert_eq!(encode_uri_component("&?=/#+"), "%26%3F%3D%2F%23%2B");
        assert_eq!(encode_uri_component("ش"), "%D8%B4");
    }

    #[test]
    fn test_whatsapp_link_shape() {
        let link = whatsapp_link("201141345223", "hi there");
        assert_eq!(link, "https://wa.me/201141345223?text=hi%20there");
    }

    #[test]
    fn test_cart_delivery_without_address_is_blocked() {
        let mut cart = Cart::new();
        cart.add(menu_item("g1", "فرخة مشوية", "120"), 1, "");

        let checkout = CartCheckout::new(OrderType::Delivery, "   \n ");
        assert_eq!(checkout.validate(&cart), Err(CheckoutError::MissingAddress));
        assert_eq!(
            checkout.message(&cart, "جنيه"),
            Err(CheckoutError::MissingAddress)
        );
    }

    #[test]
    fn test_cart_takeaway_needs_no_address() {
        let mut cart = Cart::new();
        cart.add(menu_item("g1", "فرخة مشوية", "120"), 1, "");
        assert!(CartCheckout::new(OrderType::Takeaway, "").validate(&cart).is_ok());
    }

    #[test]
    fn test_empty_cart_is_blocked() {
        let checkout = CartCheckout::new(OrderType::Takeaway, "");
        assert_eq!(checkout.validate(&Cart::new()), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_cart_message_template() {
        let mut cart = Cart::new();
        cart.add(menu_item("g3", "كفتة مشوية", "85 - 280"), 2, "بدون بصل");
        cart.add(menu_item("h1", "شاي", "15"), 1, "");

        let checkout = CartCheckout::new(OrderType::Delivery, "  شارع النصر  ");
        let message = checkout.message(&cart, "جنيه").unwrap();

        let expected = "*طلب جديد من السلة 🛍️*\n\
            ----------------------------\n\
            *النوع:* 🛵 توصيل للمنزل\n\
            \n1. *2x كفتة مشوية*\
            \n   📝 ملاحظة: بدون بصل\
            \n2. *1x شاي*\
            \n\n----------------------------\n\
            *الإجمالي التقديري:* 185 جنيه\n\
            *العنوان:* شارع النصر\n\
            ----------------------------\n\
            يرجى تأكيد الطلب.";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_cart_takeaway_message_omits_address() {
        let mut cart = Cart::new();
        cart.add(menu_item("h1", "شاي", "15"), 1, "");

        let message = CartCheckout::new(OrderType::Takeaway, "ignored")
            .message(&cart, "جنيه")
            .unwrap();
        assert!(message.contains("🥡 استلام من المطعم"));
        assert!(!message.contains("العنوان"));
    }

    #[test]
    fn test_quick_order_message_for_delivery() {
        let mut order = QuickOrder::new(menu_item("g3", "كفتة مشوية", "85 - 280"));
        order.quantity = 2;
        order.address = "شارع النصر".to_string();
        order.delivery_time = DeliveryTime::OneHour;
        order.note = " حار ".to_string();

        let expected = "*طلب جديد من الموقع 🍗*\n\
            ----------------------------\n\
            *النوع:* 🛵 توصيل للمنزل\n\
            *الطلب:* 2x كفتة مشوية\n\
            *السعر الإجمالي:* 170 - 560 جنيه\n\
            *العنوان:* شارع النصر\n\
            *وقت التوصيل:* ساعة\n\
            *ملاحظات:* حار\n\
            ----------------------------\n\
            يرجى تأكيد الاستلام.";
        assert_eq!(order.message("جنيه").unwrap(), expected);
    }

    #[test]
    fn test_quick_order_dine_in_skips_delivery_fields() {
        let mut order = QuickOrder::new(menu_item("m2", "صينية الوحوش", "650"));
        order.order_type = OrderType::DineIn;
        order.quantity = 2;

        let message = order.message("جنيه").unwrap();
        assert!(message.contains("🍽️ تناول في المطعم (صالة)"));
        assert!(message.contains("*السعر الإجمالي:* 1,300 جنيه"));
        assert!(!message.contains("وقت التوصيل"));
        assert!(!message.contains("ملاحظات"));
    }

    #[test]
    fn test_quick_delivery_without_address_is_blocked() {
        let order = QuickOrder::new(menu_item("g1", "فرخة مشوية", "120"));
        assert_eq!(order.validate(), Err(CheckoutError::MissingDeliveryAddress));
        assert_eq!(
            order.validate().unwrap_err().to_string(),
            "يرجى إدخال العنوان لإتمام طلب التوصيل"
        );
    }

    #[test]
    fn test_link_uses_profile_recipient() {
        let profile = StoreProfile::builtin().unwrap();
        let mut order = QuickOrder::new(menu_item("h1", "شاي", "15"));
        order.order_type = OrderType::Takeaway;

        let link = order.link(&profile).unwrap();
        assert!(link.starts_with("https://wa.me/201141345223?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }
}
