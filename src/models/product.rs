use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog metadata for a product, as returned by `GET /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// Available stock for a product, as returned by `GET /stock/{id}`
///
/// A read-only external fact; never cached beyond the operation that
/// fetched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub id: u64,
    pub amount: u32,
}

/// A single line of the cart: product metadata plus the selected quantity.
///
/// The cart is a sequence of these, unique by `id`, insertion order
/// preserved for display. `amount` is always at least 1; a line whose
/// quantity drops to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub amount: u32,
}

impl CartItem {
    /// Create a cart line for a newly added product with quantity 1
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Line subtotal: unit price times quantity
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}
