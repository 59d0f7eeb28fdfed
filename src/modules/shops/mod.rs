// Shops module: per-shop GST configuration

pub mod models;
pub mod repositories;

pub use models::{ShopTaxDefaults, ShopTaxSettings};
pub use repositories::{MySqlShopConfigStore, ShopConfigStore};
