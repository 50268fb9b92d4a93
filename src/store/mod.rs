use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// Storage layout: four independently keyed values, written back in full after
// every mutation that touches them.
pub const SETTINGS_KEY: &str = "texpress_settings";
pub const PRODUCTS_KEY: &str = "texpress_products";
pub const CART_KEY: &str = "texpress_cart";
pub const USER_KEY: &str = "texpress_user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization failed")]
    Serde(#[from] serde_json::Error),

    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),
}

/// Durable key/value persistence for JSON-shaped state.
///
/// `load` treats an absent or corrupt value as `None`; callers fall back to
/// defaults. `save` fully overwrites any prior value under the key.
pub trait KeyValueStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError>;
}
