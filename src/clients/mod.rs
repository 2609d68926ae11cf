// Clients module - remote catalog lookups (stock and product metadata)

pub mod catalog;

pub use catalog::{HttpCatalogClient, ProductClient, StockClient};
