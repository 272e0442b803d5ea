use std::fmt;

/// Percentage applied to the current price to show the struck-through
/// "original" price on a card.
pub const ORIGINAL_PRICE_MARKUP_PERCENT: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative amount in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Convert a decimal amount to cents, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, non-finite or out-of-range values.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self {
            cents: cents as u64,
        })
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Scale by `percent` and round half-up to the nearest cent.
    pub fn scaled_percent(self, percent: u64) -> Self {
        let scaled = self.cents.saturating_mul(percent).saturating_add(50) / 100;
        Self { cents: scaled }
    }

    pub fn original_price(self) -> Self {
        self.scaled_percent(ORIGINAL_PRICE_MARKUP_PERCENT)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Transient copy of a catalog record; the catalog service owns the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Option<String>,
    pub image_url: Option<String>,
}
