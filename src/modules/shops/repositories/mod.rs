pub mod shop_repository;

pub use shop_repository::{MySqlShopConfigStore, ShopConfigStore};
