use super::{run_migrations, ChatStore, NewMessage, StorageError};
use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use shared_types::{ChatMessage, ChatRole};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub type DbConnection = Arc<Mutex<Connection>>;

/// SQLite-backed chat store. A single connection is opened at startup and
/// shared by every request.
#[derive(Clone)]
pub struct SqliteChatStore {
    connection: DbConnection,
}

impl SqliteChatStore {
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Unavailable(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(db_path)?;
        let store = Self::from_connection(conn)?;
        info!(path = %db_path.display(), "Chat store opened");
        Ok(store)
    }

    /// Private in-memory database, gone when the store is dropped
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, StorageError> {
        run_migrations(&mut conn)?;
        Ok(Self {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    #[doc(hidden)]
    pub fn connection(&self) -> DbConnection {
        Arc::clone(&self.connection)
    }
}

#[async_trait]
impl ChatStore for SqliteChatStore {
    async fn append(&self, message: NewMessage) -> Result<(), StorageError> {
        let conn = self
            .connection
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock error: {}", e)))?;

        conn.execute(
            "INSERT INTO chat_messages (role, text, timestamp) VALUES (?1, ?2, ?3)",
            params![
                message.role.as_str(),
                message.text,
                message.timestamp.timestamp_millis()
            ],
        )?;

        debug!(id = conn.last_insert_rowid(), role = %message.role, "Chat message stored");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, StorageError> {
        let conn = self
            .connection
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock error: {}", e)))?;

        let mut stmt = conn.prepare(
            "SELECT id, role, text, timestamp
             FROM chat_messages
             ORDER BY timestamp ASC, id ASC",
        )?;

        let messages = stmt
            .query_map([], |row| {
                let role_str: String = row.get(1)?;
                let role = role_str.parse::<ChatRole>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?;

                let millis: i64 = row.get(3)?;
                let timestamp = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        Type::Integer,
                        format!("timestamp out of range: {}", millis).into(),
                    )
                })?;

                Ok(ChatMessage {
                    id: row.get(0)?,
                    role,
                    text: row.get(2)?,
                    timestamp,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(messages)
    }
}
