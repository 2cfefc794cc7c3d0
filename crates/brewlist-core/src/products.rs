use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One in-stock product listing, normalized for export.
///
/// Created once per item during normalization and never mutated afterwards;
/// the exporter writes each row exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    /// Upstream product identifier, coerced to a string. Empty when the
    /// source item carried no identifier at all.
    pub product_id: String,
    /// Trimmed display name exactly as the storefront shows it.
    pub name: String,
    /// Non-promotional price in major units, when known.
    pub regular_price: Option<Decimal>,
    /// Promotional price in major units; only set while a promotion is
    /// active.
    pub promo_price: Option<Decimal>,
    /// Best-effort brand guess extracted from the product name. May be empty.
    pub brand: String,
    /// Display name of the city the listing was resolved for.
    pub city: String,
}

impl ProductRow {
    /// Returns `true` while the item carries an active promotional price.
    #[must_use]
    pub fn is_on_promotion(&self) -> bool {
        self.promo_price.is_some()
    }

    /// The price a shopper currently pays: the promotional price when one is
    /// active, the regular price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> Option<Decimal> {
        self.promo_price.or(self.regular_price)
    }
}
