use super::*;
use erp_core::ID;
use erp_core::StoreError;
use erp_core::Unique;
use erp_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

fn user_from_row(row: &tokio_postgres::Row) -> User {
    User::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, String>(3),
    )
}

/// Postgres-backed credential store. Uniqueness of `email` is enforced by
/// the table's `UNIQUE` constraint, so concurrent registrations of one
/// address resolve inside the database.
#[async_trait::async_trait]
impl Users for Arc<Client> {
    async fn create(&self, user: &User, hashword: &str) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, email, name, role, hashword) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &user.id().inner(),
                &user.email(),
                &user.name(),
                &user.role(),
                &hashword,
            ],
        )
        .await
        .map(|_| ())
        .map_err(classify)
    }

    async fn lookup(&self, email: &str) -> Result<Option<(User, String)>, StoreError> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, name, role, hashword FROM ",
                USERS,
                " WHERE email = $1"
            ),
            &[&email],
        )
        .await
        .map(|opt| opt.map(|ref row| (user_from_row(row), row.get::<_, String>(4))))
        .map_err(classify)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.query(
            const_format::concatcp!("SELECT id, email, name, role FROM ", USERS, " ORDER BY id"),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(user_from_row).collect())
        .map_err(classify)
    }
}
