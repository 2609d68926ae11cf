// Storage module - persisted key-value store and the typed cart snapshot on top of it

pub mod cart_storage;
pub mod kv;

pub use cart_storage::{CartStorage, DEFAULT_CART_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
