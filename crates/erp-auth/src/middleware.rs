use super::*;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::Payload;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::AUTHORIZATION;
use actix_web::http::header::HeaderMap;
use actix_web::middleware::Next;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Token carried in `Authorization: Bearer <token>`, if any. The scheme
/// name matches case-insensitively.
pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;
    Some(token.trim())
        .filter(|_| scheme.eq_ignore_ascii_case("bearer"))
        .filter(|token| !token.is_empty())
}

/// Resolves the caller of `req`, reusing an identity the guard already
/// attached. A missing header and a bad token fail the same way.
fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    if let Some(identity) = req.extensions().get::<Identity>() {
        return Ok(identity.clone());
    }
    let issuer = req
        .app_data::<web::Data<Issuer>>()
        .ok_or_else(|| AuthError::internal("token issuer not configured"))?;
    let token = bearer(req.headers()).ok_or(AuthError::Unauthenticated)?;
    issuer.verify(token).map(Identity::from).map_err(AuthError::from)
}

/// Middleware for protected resources, for use with
/// [`actix_web::middleware::from_fn`]. Short-circuits with 401 before the
/// wrapped service runs; on success the [`Identity`] is stored in the
/// request extensions.
pub async fn guard<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    match authenticate(req.request()) {
        Ok(identity) => {
            log::debug!("authenticated {} ({})", identity.email(), identity.role());
            req.extensions_mut().insert(identity);
            next.call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        Err(e) => Ok(req.error_response(e).map_into_right_body()),
    }
}

/// Extractor for the authenticated caller of a handler.
pub struct Auth(pub Identity);

impl Auth {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Auth))
    }
}
