use super::*;
use erp_core::ID;

/// JWT payload: who the bearer is and until when.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<User>, email: String, role: String) -> Self {
        Self::issued(user, email, role, erp_core::now())
    }
    /// Claims as if issued at `iat` (unix seconds).
    pub fn issued(user: ID<User>, email: String, role: String, iat: i64) -> Self {
        Self {
            sub: user.inner(),
            email,
            role,
            iat,
            exp: iat + Issuer::duration().as_secs() as i64,
        }
    }
    pub fn user(&self) -> ID<User> {
        ID::from(self.sub)
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn role(&self) -> &str {
        &self.role
    }
}
