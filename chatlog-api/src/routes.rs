//! Route table shared by the server binary and the integration tests.

use crate::config::CorsConfig;
use crate::error::AppError;
use crate::handlers::{chat, health};
use actix_cors::Cors;
use actix_web::web;
use tracing::warn;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(chat::save_chat)
            .service(chat::list_chats)
            .service(health::health_check),
    );
}

/// Turns body extraction failures (bad JSON, missing fields, unknown role)
/// into structured 400 responses.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!(path = %req.path(), error = %err, "Rejected request body");
        AppError::InvalidRequest(err.to_string()).into()
    })
}

pub fn build_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}
