use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::models::{ClientError, ClientResult, Product, Stock};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait defining the read-only stock lookup
#[async_trait]
pub trait StockClient: Send + Sync {
    /// Fetch the currently available stock for a product
    async fn fetch_stock(&self, product_id: u64) -> ClientResult<Stock>;
}

/// Trait defining the read-only product metadata lookup
#[async_trait]
pub trait ProductClient: Send + Sync {
    /// Fetch catalog metadata for a product
    async fn fetch_product(&self, product_id: u64) -> ClientResult<Product>;
}

/// HTTP implementation of the catalog lookups.
///
/// Talks to the storefront API:
/// `GET {base_url}/stock/{id}` and `GET {base_url}/products/{id}`.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a catalog client against `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a catalog client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidBaseUrl { url: base_url });
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_client(http, base_url))
    }

    /// Create a catalog client reusing an existing `reqwest::Client`
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Base URL of the catalog API (for diagnostics and tests)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Fetching catalog resource");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StockClient for HttpCatalogClient {
    #[instrument(skip(self), fields(product_id = product_id))]
    async fn fetch_stock(&self, product_id: u64) -> ClientResult<Stock> {
        let stock: Stock = self.get_json(&format!("stock/{}", product_id)).await?;
        debug!(amount = stock.amount, "Stock fetched");
        Ok(stock)
    }
}

#[async_trait]
impl ProductClient for HttpCatalogClient {
    #[instrument(skip(self), fields(product_id = product_id))]
    async fn fetch_product(&self, product_id: u64) -> ClientResult<Product> {
        let product: Product = self.get_json(&format!("products/{}", product_id)).await?;
        debug!(title = %product.title, "Product fetched");
        Ok(product)
    }
}
