use super::*;
use erp_core::ID;
use erp_core::StoreError;
use erp_core::Unique;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process product store, ordered by id.
#[derive(Default)]
pub struct MemoryProducts {
    rows: RwLock<BTreeMap<ID<Product>, Product>>,
}

#[async_trait::async_trait]
impl Products for MemoryProducts {
    async fn insert(&self, product: &Product) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&product.id()) {
            return Err(StoreError::Duplicate("products_pkey".to_string()));
        }
        rows.insert(product.id(), product.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
