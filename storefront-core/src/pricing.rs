//! Free-text price parsing.
//!
//! Menu prices are strings such as `"120"` or `"85 - 280"`. Display keeps
//! both ends of a range, while cart arithmetic only ever uses the first
//! number.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII digits only: Arabic-Indic numerals are not prices.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

/// Extract every maximal run of ASCII digits, in order.
///
/// Runs too large for `u64` saturate instead of being dropped.
pub fn parse_price_numbers(price: &str) -> Vec<u64> {
    DIGIT_RUN
        .find_iter(price)
        .map(|run| run.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

/// Interpretation of a price string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTag {
    /// No digits at all; treated as free.
    Unpriced,
    Fixed(u64),
    /// Two or more numbers; anything past the second is ignored.
    Range { low: u64, high: u64 },
}

impl PriceTag {
    pub fn parse(price: &str) -> Self {
        match parse_price_numbers(price).as_slice() {
            [] => Self::Unpriced,
            [single] => Self::Fixed(*single),
            [low, high, ..] => Self::Range {
                low: *low,
                high: *high,
            },
        }
    }

    /// Price of one unit for arithmetic: the first number, or 0.
    pub const fn unit_amount(self) -> u64 {
        match self {
            Self::Unpriced => 0,
            Self::Fixed(amount) | Self::Range { low: amount, .. } => amount,
        }
    }

    /// Amount contributed to a cart total by `quantity` units.
    pub fn line_amount(self, quantity: u32) -> u64 {
        self.unit_amount().saturating_mul(u64::from(quantity))
    }

    /// Text shown next to the order button for `quantity` units.
    pub fn display_total(self, quantity: u32) -> String {
        let quantity = u64::from(quantity);
        match self {
            Self::Unpriced => "0".to_string(),
            Self::Fixed(amount) => format_grouped(amount.saturating_mul(quantity)),
            Self::Range { low, high } => format!(
                "{} - {}",
                low.saturating_mul(quantity),
                high.saturating_mul(quantity)
            ),
        }
    }
}

/// Format an integer with comma thousands separators (`1200` -> `"1,200"`).
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
