use thiserror::Error;

/// Service-level errors that can occur in cart business logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("insufficient stock for product {product_id}: requested={requested}, available={available}")]
    InsufficientStock {
        product_id: u64,
        requested: u32,
        available: u32,
    },

    #[error("product not in cart: {product_id}")]
    ProductNotInCart { product_id: u64 },

    #[error("catalog lookup failed: {source}")]
    Client {
        #[from]
        source: ClientError,
    },

    #[error("cart persistence failed: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

/// Transport-level errors for remote catalog lookups
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("unexpected response status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },

    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
}

/// Errors raised by the persisted key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for catalog client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
