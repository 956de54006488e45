//! Turning a geolocation fix into address text.

use crate::error::LocationError;

/// Google Maps link for a coordinate pair.
pub fn maps_link(latitude: f64, longitude: f64) -> String {
    format!("https://maps.google.com/?q={latitude},{longitude}")
}

/// Add a map link to whatever the customer already typed in the cart drawer.
///
/// An empty (or whitespace-only) address becomes `موقعي: <link>`; otherwise
/// the link goes on its own line below the existing text.
pub fn append_location(address: &str, link: &str) -> String {
    if address.trim().is_empty() {
        format!("موقعي: {link}")
    } else {
        format!("{address}\n📍 {link}")
    }
}

/// Menu card variant of [`append_location`]: the existing text keeps a
/// trailing space before the line break.
pub fn append_location_padded(address: &str, link: &str) -> String {
    if address.trim().is_empty() {
        format!("موقعي: {link}")
    } else {
        format!("{address} \n📍 {link}")
    }
}

impl LocationError {
    /// Single alert text used by the cart drawer, which does not
    /// distinguish failure causes beyond missing support.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Unsupported => "خاصية تحديد الموقع غير مدعومة",
            _ => "تعذر تحديد الموقع",
        }
    }

    /// Map a `PositionError.code` to an error.
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}
