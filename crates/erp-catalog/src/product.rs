use erp_core::ID;
use erp_core::Unique;

/// Sellable item. Prices are integer minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    id: ID<Self>,
    name: String,
    description: String,
    price: i64,
    stock: i32,
}

impl Product {
    pub fn new(id: ID<Self>, name: String, description: String, price: i64, stock: i32) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn price(&self) -> i64 {
        self.price
    }
    pub fn stock(&self) -> i32 {
        self.stock
    }
}

impl Unique for Product {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Wire shape of a [`Product`].
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ProductInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i32,
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            stock: product.stock(),
        }
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use erp_pg::*;

    impl Schema for Product {
        fn name() -> &'static str {
            PRODUCTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                PRODUCTS,
                " (
                    id          UUID PRIMARY KEY,
                    name        VARCHAR(255) NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    price       BIGINT NOT NULL CHECK (price >= 0),
                    stock       INTEGER NOT NULL DEFAULT 0
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_products_name ON ",
                PRODUCTS,
                " (name);"
            )
        }
    }
}
