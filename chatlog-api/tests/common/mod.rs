#![allow(dead_code)]

use actix_web::{test, web, App};
use chatlog_api::routes::configure_routes;
use chatlog_api::{InMemoryChatStore, SharedChatStore, SqliteChatStore};
use std::sync::Arc;

pub struct TestApp<S> {
    pub store: SharedChatStore,
    pub app: S,
}

pub async fn setup_app_with_store(
    store: SharedChatStore,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(configure_routes),
    )
    .await;

    TestApp { store, app }
}

/// App backed by a private in-memory SQLite database
pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let store: SharedChatStore = Arc::new(SqliteChatStore::in_memory()?);
    Ok(setup_app_with_store(store).await)
}

/// App backed by an in-memory store that has been switched offline
pub async fn setup_unavailable_app() -> (
    Arc<InMemoryChatStore>,
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
) {
    let memory = Arc::new(InMemoryChatStore::new());
    memory.set_available(false);
    let store: SharedChatStore = memory.clone();
    (memory, setup_app_with_store(store).await)
}
