//! Normalization from raw search items to [`brewlist_core::ProductRow`].
//!
//! Brand guessing is delegated to [`crate::brand`]; this module focuses on
//! structural conversion and promotion pricing.

use brewlist_core::{from_minor_units, ProductRow};
use serde_json::Value;

use crate::brand::extract_brand_from_name;
use crate::types::{scalar_to_string, GoodsItem};

/// Converts one raw in-stock item into an export row.
///
/// Pricing follows the promotion flag: while a promotion is active, the
/// item-level `price` is the promotional price and `promotion.oldPrice`
/// becomes the regular price, but only when `oldPrice` is integer-typed;
/// otherwise the promotional price doubles as the regular one. Without a
/// promotion, `price` is simply the regular price and no promo price is
/// emitted.
#[must_use]
pub fn to_product_row(item: &GoodsItem, city_name: &str) -> ProductRow {
    let promotion = item.promotion.as_ref();
    let is_promo = promotion.is_some_and(|p| p.is_promotion);
    let old_price = promotion
        .and_then(|p| p.old_price.as_ref())
        .and_then(Value::as_i64);

    let promo_price = if is_promo {
        item.price.map(from_minor_units)
    } else {
        None
    };
    let regular_price = match (is_promo, old_price) {
        (true, Some(old)) => Some(from_minor_units(old)),
        _ => item.price.map(from_minor_units),
    };

    let name = item.name.as_deref().unwrap_or("").trim().to_string();
    let brand = extract_brand_from_name(&name);

    ProductRow {
        product_id: product_id(item),
        name,
        regular_price,
        promo_price,
        brand,
        city: city_name.to_string(),
    }
}

/// Prefers the dedicated `productId` field, falls back to `id`, coerces to
/// string; empty when both are absent.
fn product_id(item: &GoodsItem) -> String {
    item.product_id
        .as_ref()
        .and_then(scalar_to_string)
        .filter(|id| !id.is_empty())
        .or_else(|| {
            item.id
                .as_ref()
                .and_then(scalar_to_string)
                .filter(|id| !id.is_empty())
        })
        .unwrap_or_default()
}
