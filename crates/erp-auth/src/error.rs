use erp_core::StoreError;

/// Why a bearer token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Malformed,
    BadSignature,
    Expired,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed token"),
            Self::BadSignature => write!(f, "bad token signature"),
            Self::Expired => write!(f, "token expired"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Everything the auth layer reports to a client.
///
/// Lower-level failures are folded into one of these four kinds before
/// they cross the transport boundary. `Unauthenticated` deliberately
/// carries no detail, so unknown accounts, wrong passwords, and bad
/// tokens look the same from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidInput { field: &'static str, reason: String },
    Conflict,
    Unauthenticated,
    Internal(String),
}

impl AuthError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
    /// Logs the cause; only a generic message reaches the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        log::error!("internal error: {}", cause);
        Self::Internal(cause.to_string())
    }
    /// Message safe to show to clients.
    pub fn public(&self) -> String {
        match self {
            Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::Conflict => write!(f, "email already registered"),
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Internal(s) => write!(f, "internal error: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        log::debug!("rejected token: {}", e);
        Self::Unauthenticated
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate(_) => Self::Conflict,
            StoreError::Backend(_) => Self::internal(e),
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::*;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                Self::Conflict => StatusCode::CONFLICT,
                Self::Unauthenticated => StatusCode::UNAUTHORIZED,
                Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            let body = match self {
                Self::InvalidInput { field, .. } => {
                    serde_json::json!({ "error": self.public(), "field": field })
                }
                _ => serde_json::json!({ "error": self.public() }),
            };
            HttpResponse::build(self.status_code()).json(body)
        }
    }
}
