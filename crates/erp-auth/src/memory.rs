use super::*;
use erp_core::StoreError;
use erp_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process credential store keyed by email.
///
/// The write lock spans the existence check and the insert, which gives
/// the same guarantee as a unique constraint.
#[derive(Default)]
pub struct MemoryUsers {
    rows: RwLock<HashMap<String, (User, String)>>,
}

#[async_trait::async_trait]
impl Users for MemoryUsers {
    async fn create(&self, user: &User, hashword: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(user.email()) {
            return Err(StoreError::Duplicate("users_email_key".to_string()));
        }
        rows.insert(
            user.email().to_string(),
            (user.clone(), hashword.to_string()),
        );
        Ok(())
    }

    async fn lookup(&self, email: &str) -> Result<Option<(User, String)>, StoreError> {
        Ok(self.rows.read().await.get(email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users = self
            .rows
            .read()
            .await
            .values()
            .map(|(user, _)| user.clone())
            .collect::<Vec<_>>();
        users.sort_by_key(|u| u.id());
        Ok(users)
    }
}
