use super::*;
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::TestRequest;
use actix_web::test::call_service;
use actix_web::test::init_service;
use actix_web::test::read_body;
use actix_web::test::read_body_json;
use erp_auth::MemoryUsers;
use erp_auth::Secret;
use erp_catalog::MemoryProducts;
use erp_core::ID;
use erp_core::StoreError;
use serde_json::Value;
use serde_json::json;

struct Up;
struct Down;

#[async_trait::async_trait]
impl Health for Up {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl Health for Down {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

fn state(health: Arc<dyn Health>, products: Arc<MemoryProducts>) -> State {
    State::new(
        Arc::new(MemoryUsers::default()),
        products,
        health,
        Issuer::new(&Secret::new("test-secret")),
    )
}

fn register(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": email, "name": "A", "password": password }))
}

fn login(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

fn get(uri: &str, token: Option<&str>) -> TestRequest {
    match token {
        Some(token) => TestRequest::get()
            .uri(uri)
            .insert_header((AUTHORIZATION, format!("Bearer {}", token))),
        None => TestRequest::get().uri(uri),
    }
}

#[actix_web::test]
async fn register_login_and_access() {
    let products = Arc::new(MemoryProducts::default());
    let widget = Product::new(ID::default(), "Widget".into(), "".into(), 1999, 5);
    products.insert(&widget).await.unwrap();
    let state = state(Arc::new(Up), products);
    let app = init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let res = call_service(&app, register("a@x.com", "password123").to_request()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = read_body_json(res).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["email"], "a@x.com");

    let res = call_service(&app, register("a@x.com", "password123").to_request()).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = call_service(&app, login("a@x.com", "password123").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_body_json(res).await;
    let token = body["token"].as_str().unwrap().to_string();

    let res = call_service(&app, login("a@x.com", "wrong-password").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = call_service(&app, get("/api/v1/users", Some(&token)).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let users: Value = read_body_json(res).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["id"], created["id"]);
    assert_eq!(users[0]["role"], "user");
    assert!(users[0].get("hashword").is_none());

    let res = call_service(&app, get("/api/v1/products", Some(&token)).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Value = read_body_json(res).await;
    assert_eq!(listed[0]["name"], "Widget");

    let res = call_service(&app, get("/api/v1/users", None).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let res = call_service(&app, get("/api/v1/products", None).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_does_not_reveal_accounts() {
    let state = state(Arc::new(Up), Arc::new(MemoryProducts::default()));
    let app = init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    call_service(&app, register("a@x.com", "password123").to_request()).await;
    let wrong = call_service(&app, login("a@x.com", "password124").to_request()).await;
    let unknown = call_service(&app, login("nobody@x.com", "password123").to_request()).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_body(wrong).await, read_body(unknown).await);
}

#[actix_web::test]
async fn invalid_registration_is_bad_request() {
    let state = state(Arc::new(Up), Arc::new(MemoryProducts::default()));
    let app = init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let res = call_service(&app, register("not-an-email", "password123").to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_body_json(res).await;
    assert_eq!(body["field"], "email");
}

#[actix_web::test]
async fn forged_token_is_rejected() {
    let state = state(Arc::new(Up), Arc::new(MemoryProducts::default()));
    let app = init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let forged = Issuer::new(&Secret::new("attacker-secret"))
        .issue(ID::default(), "evil@x.com", "admin")
        .unwrap();
    let res = call_service(&app, get("/api/v1/users", Some(&forged)).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn health_reports_store_state() {
    let up = state(Arc::new(Up), Arc::new(MemoryProducts::default()));
    let app = init_service(App::new().configure(|cfg| up.configure(cfg))).await;
    let res = call_service(&app, get("/api/v1/health", None).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_body_json(res).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_i64().unwrap() > 0);

    let down = state(Arc::new(Down), Arc::new(MemoryProducts::default()));
    let app = init_service(App::new().configure(|cfg| down.configure(cfg))).await;
    let res = call_service(&app, get("/api/v1/health", None).to_request()).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}
