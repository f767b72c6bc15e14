use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use shared_types::{ChatMessage, ChatRole};
use std::sync::Arc;

mod memory;
mod migrations;
mod sqlite;

pub use memory::InMemoryChatStore;
pub use migrations::run_migrations;
pub use sqlite::SqliteChatStore;

/// Append-only, timestamp ordered collection of chat messages.
///
/// Implementations never update or delete a stored message. `list_all` must
/// return messages ordered by non-decreasing timestamp, with insertion order
/// breaking ties.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn append(&self, message: NewMessage) -> Result<(), StorageError>;
    async fn list_all(&self) -> Result<Vec<ChatMessage>, StorageError>;
}

pub type SharedChatStore = Arc<dyn ChatStore>;

/// A message that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl NewMessage {
    /// Stamps the message with the current time.
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self::with_timestamp(role, text, Utc::now())
    }

    pub fn with_timestamp(
        role: ChatRole,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            role,
            text: text.into(),
            // stores keep millisecond precision
            timestamp: timestamp.trunc_subsecs(3),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),

    #[error("Schema migration failed: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(
                rusqlite::ErrorCode::DatabaseBusy
                | rusqlite::ErrorCode::DatabaseLocked
                | rusqlite::ErrorCode::CannotOpen,
            ) => StorageError::Unavailable(err.to_string()),
            _ => StorageError::OperationFailed(err.to_string()),
        }
    }
}

impl From<refinery::Error> for StorageError {
    fn from(err: refinery::Error) -> Self {
        StorageError::Migration(err.to_string())
    }
}
