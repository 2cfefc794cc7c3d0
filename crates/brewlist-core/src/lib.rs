pub mod money;
pub mod products;

pub use money::from_minor_units;
pub use products::ProductRow;
