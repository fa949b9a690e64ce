use super::*;
use actix_web::HttpResponse;
use actix_web::web;

pub async fn register(
    accounts: web::Data<Accounts>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AuthError> {
    accounts
        .register(&req.email, &req.name, &req.password)
        .await
        .map(|registered| HttpResponse::Created().json(registered))
}

pub async fn login(
    accounts: web::Data<Accounts>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AuthError> {
    accounts
        .login(&req.email, &req.password)
        .await
        .map(|token| HttpResponse::Ok().json(token))
}

/// Rejects unparsable JSON bodies as invalid input rather than actix's
/// plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|e, _| AuthError::invalid("body", e.to_string()).into())
}
