use super::*;
use erp_core::ID;
use erp_core::StoreError;
use erp_core::Unique;
use erp_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

fn product_from_row(row: &tokio_postgres::Row) -> Product {
    Product::new(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, i64>(3),
        row.get::<_, i32>(4),
    )
}

#[async_trait::async_trait]
impl Products for Arc<Client> {
    async fn insert(&self, product: &Product) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                PRODUCTS,
                " (id, name, description, price, stock) VALUES ($1, $2, $3, $4, $5)"
            ),
            &[
                &product.id().inner(),
                &product.name(),
                &product.description(),
                &product.price(),
                &product.stock(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(classify)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.query(
            const_format::concatcp!(
                "SELECT id, name, description, price, stock FROM ",
                PRODUCTS,
                " ORDER BY id"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(product_from_row).collect())
        .map_err(classify)
    }
}
