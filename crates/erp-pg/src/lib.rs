//! PostgreSQL integration for the erp backend.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//! - [`Health`] — Liveness probe used by the health endpoint
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`create()`] — Initial table creation for a [`Schema`]
//!
//! ## Errors
//!
//! - [`classify()`] — Maps driver errors onto [`erp_core::StoreError`]
mod health;
mod schema;

pub use health::*;
pub use schema::*;

use erp_core::StoreError;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::error::SqlState;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
/// The connection driver is spawned onto the current runtime.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Creates the table and indices for `S` if they do not exist yet.
pub async fn create<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::debug!("creating table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await
}

/// Sorts a driver error into the store error taxonomy.
/// Unique violations keep the name of the offending constraint.
pub fn classify(e: PgErr) -> StoreError {
    match e.code() {
        Some(code) if *code == SqlState::UNIQUE_VIOLATION => StoreError::Duplicate(
            e.as_db_error()
                .and_then(|db| db.constraint())
                .unwrap_or_default()
                .to_string(),
        ),
        _ => StoreError::Backend(e.to_string()),
    }
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for purchase orders.
#[rustfmt::skip]
pub const ORDERS:   &str = "orders";
/// Table for catalog products.
#[rustfmt::skip]
pub const PRODUCTS: &str = "products";
/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:    &str = "users";
