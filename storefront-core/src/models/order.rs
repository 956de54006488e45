use serde::{Deserialize, Serialize};

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    #[default]
    Delivery,
    Takeaway,
    DineIn,
}

impl OrderType {
    /// Types offered from the cart drawer
    pub const CART: [Self; 2] = [Self::Delivery, Self::Takeaway];
    /// Types offered on a single menu card
    pub const QUICK: [Self; 3] = [Self::Delivery, Self::Takeaway, Self::DineIn];

    pub const fn requires_address(self) -> bool {
        matches!(self, Self::Delivery)
    }

    /// Short selector label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivery => "توصيل",
            Self::Takeaway => "تيك أواي",
            Self::DineIn => "صالة",
        }
    }

    /// Line used in the cart checkout message
    pub const fn cart_message_label(self) -> &'static str {
        match self {
            Self::Delivery => "🛵 توصيل للمنزل",
            Self::Takeaway | Self::DineIn => "🥡 استلام من المطعم",
        }
    }

    /// Line used in the single-item order message
    pub const fn quick_message_label(self) -> &'static str {
        match self {
            Self::Delivery => "🛵 توصيل للمنزل",
            Self::Takeaway => "🥡 استلام من المطعم (تيك أواي)",
            Self::DineIn => "🍽️ تناول في المطعم (صالة)",
        }
    }
}

/// Requested delivery slot for single-item delivery orders.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeliveryTime {
    #[default]
    Asap,
    FortyFiveMinutes,
    OneHour,
}

impl DeliveryTime {
    pub const ALL: [Self; 3] = [Self::Asap, Self::FortyFiveMinutes, Self::OneHour];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asap => "في أقرب وقت",
            Self::FortyFiveMinutes => "45 دقيقة",
            Self::OneHour => "ساعة",
        }
    }
}
