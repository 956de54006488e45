//! Error types for the storefront.
//!
//! Every variant that can reach the customer renders its user-facing message
//! through `Display`, so the UI can show `err.to_string()` directly.

use thiserror::Error;

/// Top-level error for storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Embedded catalog or profile JSON failed to decode.
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The durable preference store rejected a read or write.
    #[error("Preference store error: {0}")]
    Storage(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Validation failures that block an order hand-off.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing in the cart to order.
    #[error("السلة فارغة")]
    EmptyCart,

    /// Cart delivery checkout without an address.
    #[error("يرجى إدخال العنوان للاستمرار")]
    MissingAddress,

    /// Single-item delivery order without an address.
    #[error("يرجى إدخال العنوان لإتمام طلب التوصيل")]
    MissingDeliveryAddress,
}

/// Geolocation failures, mirroring the browser's `GeolocationPositionError` codes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("خاصية تحديد الموقع غير مدعومة في متصفحك")]
    Unsupported,

    #[error("يرجى السماح بالوصول للموقع لتحديد مكانك")]
    PermissionDenied,

    #[error("معلومات الموقع غير متوفرة حالياً")]
    PositionUnavailable,

    #[error("انتهت مهلة طلب الموقع")]
    Timeout,

    #[error("حدث خطأ أثناء تحديد الموقع")]
    Unknown,
}

pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_converts_into_storefront_error() {
        let err: StorefrontError = CheckoutError::MissingAddress.into();
        assert!(matches!(
            err,
            StorefrontError::Checkout(CheckoutError::MissingAddress)
        ));
        // transparent: same user-facing text
        assert_eq!(err.to_string(), CheckoutError::MissingAddress.to_string());
    }

    #[test]
    fn test_decode_error_names_the_source() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = StorefrontError::Decode {
            what: "catalog",
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode catalog"));
    }
}
