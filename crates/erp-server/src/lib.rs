//! erp backend server.
//!
//! Wires the credential store, token issuer, and catalog into a single
//! actix-web application under `/api/v1`.
//!
//! - [`Config`] — Startup configuration from flags and environment
//! - [`State`] — Shared handles installed as app data
//! - [`run()`] — Connects, creates tables, and serves
mod config;
#[cfg(test)]
mod tests;

pub use config::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::middleware::from_fn;
use actix_web::web;
use erp_auth::Accounts;
use erp_auth::Auth;
use erp_auth::AuthError;
use erp_auth::Issuer;
use erp_auth::User;
use erp_auth::UserInfo;
use erp_auth::Users;
use erp_catalog::Order;
use erp_catalog::Product;
use erp_catalog::Products;
use erp_pg::Health;
use std::sync::Arc;

/// Handles shared by every worker.
#[derive(Clone)]
pub struct State {
    accounts: web::Data<Accounts>,
    issuer: web::Data<Issuer>,
    users: web::Data<dyn Users>,
    products: web::Data<dyn Products>,
    health: web::Data<dyn Health>,
}

impl State {
    pub fn new(
        users: Arc<dyn Users>,
        products: Arc<dyn Products>,
        health: Arc<dyn Health>,
        issuer: Issuer,
    ) -> Self {
        let issuer = web::Data::new(issuer);
        let accounts = Accounts::new(users.clone(), issuer.clone().into_inner());
        Self {
            accounts: web::Data::new(accounts),
            issuer,
            users: web::Data::from(users),
            products: web::Data::from(products),
            health: web::Data::from(health),
        }
    }

    #[rustfmt::skip]
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.accounts.clone())
            .app_data(self.issuer.clone())
            .app_data(self.users.clone())
            .app_data(self.products.clone())
            .app_data(self.health.clone())
            .app_data(erp_auth::json_config())
            .service(
                web::scope("/api/v1")
                    .route("/health", web::get().to(health))
                    .service(
                        web::scope("/auth")
                            .route("/register", web::post().to(erp_auth::register))
                            .route("/login", web::post().to(erp_auth::login)),
                    )
                    .service(web::resource("/users").route(web::get().to(users)).wrap(from_fn(erp_auth::guard)))
                    .service(web::resource("/products").route(web::get().to(erp_catalog::products)).wrap(from_fn(erp_auth::guard))),
            );
    }
}

async fn health(probe: web::Data<dyn Health>) -> impl Responder {
    let timestamp = erp_core::now();
    match probe
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "timestamp": timestamp })),
        Err(_) => HttpResponse::ServiceUnavailable()
            .json(serde_json::json!({ "status": "unavailable", "timestamp": timestamp })),
    }
}

async fn users(store: web::Data<dyn Users>, auth: Auth) -> Result<HttpResponse, AuthError> {
    log::debug!("{} listed users", auth.identity().email());
    let users = store.list().await?;
    Ok(HttpResponse::Ok().json(users.iter().map(UserInfo::from).collect::<Vec<_>>()))
}

/// Connects to the database, creates missing tables, and serves until
/// the server is stopped.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let secret = config.secret()?;
    let client = erp_pg::db(&config.database_url).await?;
    erp_pg::create::<User>(&client).await?;
    erp_pg::create::<Product>(&client).await?;
    erp_pg::create::<Order>(&client).await?;
    let state = State::new(
        Arc::new(client.clone()),
        Arc::new(client.clone()),
        Arc::new(client),
        Issuer::new(&secret),
    );
    log::info!("starting server on {}", config.bind);
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::new("%r %s %Dms"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(move |cfg| state.configure(cfg))
    });
    let server = match config.workers {
        Some(n) => server.workers(n),
        None => server,
    };
    server.bind(&config.bind)?.run().await?;
    Ok(())
}
