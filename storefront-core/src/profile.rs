//! Restaurant profile: branding, messaging recipient and contact details.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};

const BUILTIN_PROFILE: &str = include_str!("../data/profile.json");

/// Outbound social media link shown in the header and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// One line of the footer contact block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub text: String,
    pub icon: String,
    pub href: String,
}

impl ContactInfo {
    /// Web links open in a new tab; `tel:`/`mailto:` stay in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreProfile {
    pub name: String,
    pub latin_name: String,
    /// International number without `+`, as `wa.me` expects.
    pub whatsapp_number: String,
    /// Short currency label ("ج.م")
    pub currency: String,
    /// Currency word used inside order messages ("جنيه")
    pub currency_long: String,
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u32,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub contact_info: Vec<ContactInfo>,
}

const fn default_splash_duration_ms() -> u32 {
    2500
}

impl StoreProfile {
    /// Decode the profile shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PROFILE)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| StorefrontError::Decode {
            what: "store profile",
            source,
        })
    }

    /// Minimal profile used when the embedded one cannot be decoded.
    pub fn fallback() -> Self {
        Self {
            name: "ربع مشوي".to_string(),
            latin_name: "Rob3 Mashwy".to_string(),
            whatsapp_number: "201141345223".to_string(),
            currency: "ج.م".to_string(),
            currency_long: "جنيه".to_string(),
            splash_duration_ms: default_splash_duration_ms(),
            social_links: Vec::new(),
            contact_info: Vec::new(),
        }
    }

    /// Plain chat link to the restaurant, without a pre-filled message
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }
}
