//! Product catalog and order storage.
//!
//! Storage and listing only; nothing here prices, reserves, or fulfils.
//!
//! - [`Product`] / [`ProductInfo`] — Catalog entry and its wire shape
//! - [`Order`] — Stored purchase record
//! - [`Products`] — Product store capability, with [`MemoryProducts`]
mod memory;
mod order;
mod product;
mod store;

pub use memory::*;
pub use order::*;
pub use product::*;
pub use store::*;

#[cfg(feature = "database")]
mod repository;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
