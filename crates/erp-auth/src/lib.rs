//! Authentication, sessions, and access control.
//!
//! JWT-based authentication with Argon2 password hashing.
//!
//! ## Accounts
//!
//! - [`User`] — Registered account (the hash stays in the store)
//! - [`Users`] — Credential store capability
//! - [`MemoryUsers`] — In-process store for tests and local runs
//! - [`Accounts`] — Registration and login
//!
//! ## Security
//!
//! - [`Secret`] — Signing key, with weak-secret detection
//! - [`Issuer`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`Hasher`] — Argon2 hashing and verification
//!
//! ## Errors
//!
//! - [`AuthError`] — The four kinds clients can observe
//! - [`TokenError`] — Why a token was refused
mod claims;
mod dto;
mod error;
mod identity;
mod issuer;
mod memory;
mod password;
mod secret;
mod service;
mod store;
mod user;

pub use claims::*;
pub use dto::*;
pub use error::*;
pub use identity::*;
pub use issuer::*;
pub use memory::*;
pub use password::*;
pub use secret::*;
pub use service::*;
pub use store::*;
pub use user::*;

#[cfg(feature = "database")]
mod repository;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
