use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, instrument};

use crate::clients::{HttpCatalogClient, ProductClient, StockClient};
use crate::config::Config;
use crate::models::{
    CartItem, LogNotifier, Notification, Notifier, ServiceError, ServiceResult,
};
use crate::storage::{CartStorage, FileStore};

/// The cart state container.
///
/// Holds the in-memory ordered cart, mirrored to the persisted store after
/// every successful mutation. Quantities are validated against the remote
/// stock lookup before any increase is committed.
///
/// Every mutation holds the cart lock for its entire duration, network
/// awaits included, so overlapping invocations serialize instead of racing
/// on a stale snapshot.
pub struct CartService {
    stock_client: Arc<dyn StockClient>,
    product_client: Arc<dyn ProductClient>,
    storage: CartStorage,
    notifier: Arc<dyn Notifier>,
    items: Mutex<Vec<CartItem>>,
}

impl CartService {
    /// Create a new CartService, loading the persisted cart snapshot.
    ///
    /// An absent or corrupt snapshot yields an empty cart.
    pub fn new(
        stock_client: Arc<dyn StockClient>,
        product_client: Arc<dyn ProductClient>,
        storage: CartStorage,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let items = storage.load();
        info!(count = items.len(), "Cart loaded from storage");

        Self {
            stock_client,
            product_client,
            storage,
            notifier,
            items: Mutex::new(items),
        }
    }

    /// Wire a CartService from configuration: HTTP catalog client,
    /// file-backed storage and the logging notifier.
    pub fn from_config(config: &Config) -> ServiceResult<Self> {
        let catalog = Arc::new(HttpCatalogClient::with_timeout(
            config.api.base_url.clone(),
            config.api.request_timeout(),
        )?);
        let store = Arc::new(FileStore::new(config.storage.path.clone()));
        let storage = CartStorage::with_key(store, config.storage.cart_key.clone());

        Ok(Self::new(
            catalog.clone(),
            catalog,
            storage,
            Arc::new(LogNotifier),
        ))
    }

    /// Current cart contents, as a cloned snapshot
    pub async fn items(&self) -> Vec<CartItem> {
        self.items.lock().await.clone()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product not yet in the cart is fetched from the catalog and added
    /// with quantity 1; a product already present has its quantity bumped
    /// by one. Either path is refused when it would exceed available stock.
    #[instrument(skip(self), fields(product_id = product_id))]
    pub async fn add_product(&self, product_id: u64) {
        info!("Adding product to cart");

        if let Err(err) = self.try_add_product(product_id).await {
            error!(error = %err, "Failed to add product");
            self.notifier.notify(match err {
                ServiceError::InsufficientStock { .. } => Notification::QuantityOutOfStock,
                _ => Notification::AddProductFailed,
            });
        }
    }

    /// Remove a product's line from the cart
    #[instrument(skip(self), fields(product_id = product_id))]
    pub async fn remove_product(&self, product_id: u64) {
        info!("Removing product from cart");

        if let Err(err) = self.try_remove_product(product_id).await {
            error!(error = %err, "Failed to remove product");
            self.notifier.notify(Notification::RemoveProductFailed);
        }
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// An `amount` of zero is a silent no-op: the storefront's decrement
    /// control calls `remove_product` instead of driving a line to zero.
    /// Increases re-check stock; decreases commit directly.
    #[instrument(skip(self), fields(product_id = product_id, amount = amount))]
    pub async fn update_product_amount(&self, product_id: u64, amount: u32) {
        info!("Updating product amount");

        if let Err(err) = self.try_update_product_amount(product_id, amount).await {
            error!(error = %err, "Failed to update product amount");
            self.notifier.notify(match err {
                ServiceError::InsufficientStock { .. } => Notification::QuantityOutOfStock,
                _ => Notification::UpdateAmountFailed,
            });
        }
    }

    async fn try_add_product(&self, product_id: u64) -> ServiceResult<()> {
        let mut items = self.items.lock().await;

        let stock = self.stock_client.fetch_stock(product_id).await?;

        if let Some(position) = items.iter().position(|item| item.id == product_id) {
            let requested = items[position].amount + 1;
            if requested > stock.amount {
                return Err(ServiceError::InsufficientStock {
                    product_id,
                    requested,
                    available: stock.amount,
                });
            }

            let mut updated = items.clone();
            updated[position].amount = requested;
            self.commit(&mut items, updated)?;
        } else {
            let product = self.product_client.fetch_product(product_id).await?;

            if stock.amount == 0 {
                return Err(ServiceError::InsufficientStock {
                    product_id,
                    requested: 1,
                    available: 0,
                });
            }

            let mut updated = items.clone();
            updated.push(CartItem::new(product));
            self.commit(&mut items, updated)?;
        }

        info!("Product added to cart");
        Ok(())
    }

    async fn try_remove_product(&self, product_id: u64) -> ServiceResult<()> {
        let mut items = self.items.lock().await;

        if !items.iter().any(|item| item.id == product_id) {
            return Err(ServiceError::ProductNotInCart { product_id });
        }

        let updated: Vec<CartItem> = items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        self.commit(&mut items, updated)?;

        info!("Product removed from cart");
        Ok(())
    }

    async fn try_update_product_amount(&self, product_id: u64, amount: u32) -> ServiceResult<()> {
        if amount == 0 {
            return Ok(());
        }

        let mut items = self.items.lock().await;

        let position = items
            .iter()
            .position(|item| item.id == product_id)
            .ok_or(ServiceError::ProductNotInCart { product_id })?;
        let current = items[position].amount;

        if amount > current {
            let stock = self.stock_client.fetch_stock(product_id).await?;
            if amount > stock.amount {
                return Err(ServiceError::InsufficientStock {
                    product_id,
                    requested: amount,
                    available: stock.amount,
                });
            }
        } else if amount == current {
            // Nothing changes, skip the write
            return Ok(());
        }

        let mut updated = items.clone();
        updated[position].amount = amount;
        self.commit(&mut items, updated)?;

        info!("Product amount updated");
        Ok(())
    }

    /// Persist the updated snapshot, then swap it into memory.
    ///
    /// Persisting first keeps the full-commit-or-no-effect contract: a
    /// failed write leaves the in-memory cart untouched.
    fn commit(
        &self,
        current: &mut MutexGuard<'_, Vec<CartItem>>,
        updated: Vec<CartItem>,
    ) -> ServiceResult<()> {
        self.storage.save(&updated)?;
        **current = updated;
        Ok(())
    }
}
