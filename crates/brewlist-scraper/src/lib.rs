pub mod brand;
pub mod category;
pub mod city;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use brand::extract_brand_from_name;
pub use category::{locate_category, COFFEE_CATEGORY};
pub use city::{resolve_city, ResolvedCity};
pub use client::MagnitClient;
pub use error::ScraperError;
pub use normalize::to_product_row;
pub use types::{GoodsItem, GoodsSearchResponse};
