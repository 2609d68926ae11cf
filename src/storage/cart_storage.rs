use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{CartItem, StorageResult};
use crate::storage::KeyValueStore;

/// Default storage key, kept compatible with the storefront's local
/// storage layout.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Typed cart persistence on top of the key-value store.
///
/// The whole cart is serialized as one JSON array under a single key and
/// overwritten wholesale on every successful mutation.
pub struct CartStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartStorage {
    /// Create cart storage over `store` using the default key
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    /// Create cart storage over `store` using a custom key
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key the cart snapshot lives under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted cart snapshot.
    ///
    /// An absent key yields an empty cart. A value that cannot be read or
    /// parsed also yields an empty cart, with a warning; a corrupt snapshot
    /// must not brick the store.
    pub fn load(&self) -> Vec<CartItem> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No persisted cart, starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "Failed to read persisted cart, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Persisted cart is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted snapshot with `items`
    pub fn save(&self, items: &[CartItem]) -> StorageResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, count = items.len(), "Persisted cart snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::storage::MemoryStore;
    use rust_decimal_macros::dec;

    fn item(id: u64, amount: u32) -> CartItem {
        let mut item = CartItem::new(Product {
            id,
            title: format!("Product {}", id),
            price: dec!(99.90),
            image: format!("{}.jpg", id),
        });
        item.amount = amount;
        item
    }

    #[test]
    fn test_load_absent_key_yields_empty_cart() {
        let storage = CartStorage::new(Arc::new(MemoryStore::new()));

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip_preserves_order() {
        let storage = CartStorage::new(Arc::new(MemoryStore::new()));
        let items = vec![item(3, 2), item(1, 1), item(2, 5)];

        storage.save(&items).unwrap();
        let loaded = storage.load();

        assert_eq!(loaded, items);
        let ids: Vec<u64> = loaded.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_load_corrupt_snapshot_yields_empty_cart() {
        let store = Arc::new(MemoryStore::new());
        store.set(DEFAULT_CART_KEY, "{definitely not a cart").unwrap();

        let storage = CartStorage::new(store);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let store = Arc::new(MemoryStore::new());
        let storage = CartStorage::with_key(store.clone(), "@Test:cart");

        storage.save(&[item(1, 1)]).unwrap();

        assert_eq!(storage.key(), "@Test:cart");
        assert!(store.get("@Test:cart").unwrap().is_some());
        assert!(store.get(DEFAULT_CART_KEY).unwrap().is_none());
    }
}
