use actix_web::middleware::NormalizePath;
use actix_web::{test, web, App};
use qa_api::helpers::database::initialize_database;
use qa_api::routes::configure_routes;
use qa_api::storage::{SharedStorage, SqliteQaStorage};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub struct TestApp<S> {
    pub storage: SharedStorage,
    pub app: S,
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    setup_test_app_with_prefix("").await
}

pub async fn setup_test_app_with_prefix(
    path_prefix: &str,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let connection = initialize_database(Path::new(":memory:"))?;
    let storage: SharedStorage = Arc::new(SqliteQaStorage::new(connection));

    let app = test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(storage.clone()))
            .configure(|cfg| configure_routes(cfg, path_prefix)),
    )
    .await;

    Ok(TestApp { storage, app })
}

pub fn question_payload(text: &str) -> Value {
    serde_json::json!({ "text": text })
}

pub fn answer_payload(text: &str, user_id: &str) -> Value {
    serde_json::json!({ "text": text, "user_id": user_id })
}
