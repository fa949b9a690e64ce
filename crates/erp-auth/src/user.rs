use erp_core::ID;
use erp_core::Unique;

/// Role assigned at registration.
pub const DEFAULT_ROLE: &str = "user";

/// Registered account. The password hash is a store-only column and
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    id: ID<Self>,
    email: String,
    name: String,
    role: String,
}

impl User {
    pub fn new(id: ID<Self>, email: String, name: String, role: String) -> Self {
        Self {
            id,
            email,
            name,
            role,
        }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn role(&self) -> &str {
        &self.role
    }
}

impl Unique for User {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use erp_pg::*;

    impl Schema for User {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    name        VARCHAR(255) NOT NULL,
                    hashword    TEXT NOT NULL,
                    role        VARCHAR(32) NOT NULL DEFAULT '",
                DEFAULT_ROLE,
                "'
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_role ON ",
                USERS,
                " (role);"
            )
        }
    }
}
