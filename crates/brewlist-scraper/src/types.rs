//! Wire types for the mobile-app middle API.
//!
//! ## Observed shapes from captured app traffic
//!
//! The three endpoints are an opaque contract reconstructed from a HAR
//! capture, not published documentation, so response modeling is lenient:
//! every field defaults when absent, and fields whose JSON type varies
//! between captures (`cityId`, `productId`, `quantity`, `oldPrice`) are kept
//! as raw [`Value`]s and coerced at the use site.
//!
//! ### Prices
//! Integer amounts in minor currency units (kopecks), e.g. `price: 500` for
//! 5.00. `promotion.oldPrice` is only trusted when it is an integer.
//!
//! ### `quantity`
//! Stock on hand. Positive integer for purchasable items; absent, zero, or
//! occasionally a non-integer for everything else. Anything that is not a
//! positive integer means "not in stock".
//!
//! ### Continuation `token`
//! Opaque cursor returned with every search page; echoed verbatim on the
//! next request. The first request sends an empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /market/v2/city/info`.
#[derive(Debug, Serialize)]
pub struct CityInfoRequest<'a> {
    #[serde(rename = "fiasId")]
    pub fias_id: &'a str,
}

/// Response from the city-info endpoint.
#[derive(Debug, Deserialize)]
pub struct CityInfoResponse {
    /// Internal city code. String in most captures, but numeric ids have
    /// been observed elsewhere in this API, so coerced at the use site.
    #[serde(rename = "cityId", default)]
    pub city_id: Option<Value>,

    /// Display name of the city. May be absent.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for `POST /v2/goods/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsSearchRequest<'a> {
    pub catalog_type: &'a str,
    pub pagination: Pagination,
    pub sort: Sort,
    pub store_code: &'a str,
    pub store_type: &'a str,
    pub categories: Vec<i64>,
    pub city_id: &'a str,
    /// Always empty; the app sends the field even when no filters are set.
    pub filters: Vec<Value>,
    /// Continuation token from the previous page, or `""` on the first call.
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Serialize)]
pub struct Sort {
    pub order: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct GoodsSearchResponse {
    #[serde(default)]
    pub items: Vec<GoodsItem>,

    /// Continuation token for the next page. `null` and absent both mean
    /// "no token"; the pagination loop echoes an empty string in that case.
    #[serde(default)]
    pub token: Option<String>,
}

/// A single raw product item from the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoodsItem {
    #[serde(default)]
    pub id: Option<Value>,

    /// Dedicated product identifier; preferred over `id` when present.
    #[serde(rename = "productId", default)]
    pub product_id: Option<Value>,

    #[serde(default)]
    pub name: Option<String>,

    /// Current price in minor units. This is the promotional price while a
    /// promotion is active.
    #[serde(default)]
    pub price: Option<i64>,

    #[serde(default)]
    pub quantity: Option<Value>,

    #[serde(default)]
    pub promotion: Option<Promotion>,
}

impl GoodsItem {
    /// Returns `true` when the stock quantity is a positive integer.
    ///
    /// Missing, zero, and non-integer quantities all read as out of stock;
    /// they are filtered, never treated as errors.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.quantity
            .as_ref()
            .and_then(Value::as_i64)
            .is_some_and(|qty| qty > 0)
    }
}

/// Promotion sub-object of a [`GoodsItem`].
#[derive(Debug, Clone, Deserialize)]
pub struct Promotion {
    #[serde(rename = "isPromotion", default)]
    pub is_promotion: bool,

    /// Pre-promotion price in minor units. Only honored when integer-typed.
    #[serde(rename = "oldPrice", default)]
    pub old_price: Option<Value>,
}

/// Renders a scalar JSON value as the string a human would write: strings
/// pass through trimmed, numbers in decimal form. Arrays, objects, booleans,
/// and nulls yield `None`.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
