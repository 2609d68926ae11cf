// Re-export all model types
pub use self::errors::*;
pub use self::notifications::*;
pub use self::product::*;

mod errors;
mod notifications;
mod product;
