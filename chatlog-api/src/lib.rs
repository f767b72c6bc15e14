pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod storage;

pub use error::{AppError, AppResult};
pub use storage::{ChatStore, InMemoryChatStore, NewMessage, SharedChatStore, SqliteChatStore};
