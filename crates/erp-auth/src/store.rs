use super::*;
use erp_core::StoreError;

/// Credential store capability needed by registration, login, and listing.
///
/// `create` must be atomic with respect to the email uniqueness
/// constraint and report a violation as [`StoreError::Duplicate`].
#[async_trait::async_trait]
pub trait Users: Send + Sync {
    async fn create(&self, user: &User, hashword: &str) -> Result<(), StoreError>;
    async fn lookup(&self, email: &str) -> Result<Option<(User, String)>, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
}
