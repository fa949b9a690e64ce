//! Backend Binary
//!
//! Registration, login, and the protected listing API.
//! Configured by flags or BIND_ADDR, DATABASE_URL, ENVIRONMENT, JWT_SECRET.

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = erp_server::Config::parse();
    erp_core::log(config.level())?;
    erp_server::run(config).await
}
