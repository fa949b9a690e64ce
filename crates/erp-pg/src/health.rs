use erp_core::StoreError;
use std::sync::Arc;
use tokio_postgres::Client;

/// Liveness probe for a backing store.
#[async_trait::async_trait]
pub trait Health: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl Health for Arc<Client> {
    async fn ping(&self) -> Result<(), StoreError> {
        self.execute("SELECT 1", &[])
            .await
            .map(|_| ())
            .map_err(crate::classify)
    }
}
