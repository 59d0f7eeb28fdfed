mod shop_tax;

pub use shop_tax::{ShopTaxDefaults, ShopTaxSettings, DEFAULT_HALF_RATE};
