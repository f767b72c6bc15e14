use crate::storage::{ChatStore, NewMessage, StorageError};
use shared_types::ChatMessage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Volatile chat store. Can be switched offline to simulate an unreachable
/// backend.
#[derive(Clone)]
pub struct InMemoryChatStore {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    available: Arc<AtomicBool>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "in-memory store is offline".to_string(),
            ))
        }
    }
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatStore for InMemoryChatStore {
    async fn append(&self, message: NewMessage) -> Result<(), StorageError> {
        self.ensure_available()?;
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock error: {}", e)))?;

        let id = messages.len() as i64 + 1;
        messages.push(ChatMessage {
            id,
            role: message.role,
            text: message.text,
            timestamp: message.timestamp,
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, StorageError> {
        self.ensure_available()?;
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Lock error: {}", e)))?
            .clone();

        messages.sort_by_key(|m| (m.timestamp, m.id));
        Ok(messages)
    }
}
