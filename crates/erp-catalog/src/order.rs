use super::*;
use erp_auth::User;
use erp_core::ID;
use erp_core::Unique;

/// Status given to orders on creation.
pub const PENDING: &str = "pending";

/// Purchase of a product by a user. Stored only; no workflow acts on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    id: ID<Self>,
    user: ID<User>,
    product: ID<Product>,
    quantity: i32,
    status: String,
}

impl Order {
    pub fn new(id: ID<Self>, user: ID<User>, product: ID<Product>, quantity: i32) -> Self {
        Self {
            id,
            user,
            product,
            quantity,
            status: PENDING.to_string(),
        }
    }
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order {} ({}): {} x {} for {}",
            self.id, self.status, self.quantity, self.product, self.user
        )
    }
}

impl Unique for Order {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use erp_pg::*;

    impl Schema for Order {
        fn name() -> &'static str {
            ORDERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                ORDERS,
                " (
                    id          UUID PRIMARY KEY,
                    user_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    product_id  UUID NOT NULL REFERENCES ",
                PRODUCTS,
                "(id),
                    quantity    INTEGER NOT NULL CHECK (quantity > 0),
                    status      VARCHAR(32) NOT NULL DEFAULT '",
                PENDING,
                "'
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_orders_user ON ",
                ORDERS,
                " (user_id);
                 CREATE INDEX IF NOT EXISTS idx_orders_product ON ",
                ORDERS,
                " (product_id);"
            )
        }
    }
}
