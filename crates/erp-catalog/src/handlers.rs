use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn products(store: web::Data<dyn Products>) -> impl Responder {
    match store.list().await {
        Ok(rows) => HttpResponse::Ok().json(rows.iter().map(ProductInfo::from).collect::<Vec<_>>()),
        Err(e) => {
            log::error!("listing products failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "internal error" }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::test::call_service;
    use actix_web::test::init_service;
    use actix_web::test::read_body_json;
    use erp_core::ID;
    use std::sync::Arc;

    #[actix_web::test]
    async fn lists_products() {
        let store = Arc::new(MemoryProducts::default());
        let widget = Product::new(ID::default(), "Widget".into(), "blue".into(), 1999, 5);
        store.insert(&widget).await.unwrap();
        let store: Arc<dyn Products> = store;
        let app = init_service(
            App::new()
                .app_data(web::Data::from(store))
                .route("/products", web::get().to(products)),
        )
        .await;
        let req = TestRequest::get().uri("/products").to_request();
        let res = call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Vec<ProductInfo> = read_body_json(res).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].name, "Widget");
        assert_eq!(body[0].price, 1999);
    }
}
