use crate::error::AppError;
use crate::storage::{NewMessage, SharedChatStore};
use actix_web::{get, post, web, HttpResponse};
use shared_types::{SaveChatRequest, SaveChatResponse};
use tracing::{error, info};

#[post("/chat")]
pub async fn save_chat(
    store: web::Data<SharedChatStore>,
    request: web::Json<SaveChatRequest>,
) -> Result<HttpResponse, AppError> {
    let SaveChatRequest { role, text } = request.into_inner();
    info!(role = %role, text_len = text.len(), "Saving chat message");

    store
        .append(NewMessage::new(role, text))
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save chat message");
            AppError::from(e)
        })?;

    Ok(HttpResponse::Created().json(SaveChatResponse::saved()))
}

#[get("/chat")]
pub async fn list_chats(store: web::Data<SharedChatStore>) -> Result<HttpResponse, AppError> {
    let messages = store.list_all().await.map_err(|e| {
        error!(error = %e, "Failed to retrieve chat history");
        AppError::from(e)
    })?;

    info!(count = messages.len(), "Retrieved chat history");
    Ok(HttpResponse::Ok().json(messages))
}
