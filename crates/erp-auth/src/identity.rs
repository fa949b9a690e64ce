use super::*;
use erp_core::ID;

/// Verified bearer of a request, as attached by the access guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: ID<User>,
    email: String,
    role: String,
}

impl Identity {
    pub fn id(&self) -> ID<User> {
        self.id
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn role(&self) -> &str {
        &self.role
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user(),
            email: claims.email,
            role: claims.role,
        }
    }
}
