use super::*;
use erp_core::StoreError;

/// Product store capability.
#[async_trait::async_trait]
pub trait Products: Send + Sync {
    async fn insert(&self, product: &Product) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
}
