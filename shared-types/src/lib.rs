use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod chat;
pub mod typescript_gen;

pub use chat::{ChatMessage, ChatRole, ParseChatRoleError, SaveChatRequest, SaveChatResponse};
pub use typescript_gen::generate_typescript_definitions;

// Shared models for the chatlog API and its clients

/// Structured body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    /// Machine readable error kind, e.g. `invalid_request`
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
