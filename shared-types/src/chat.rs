use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

pub const CHAT_SAVED_MESSAGE: &str = "Chat saved successfully";

/// Producer of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChatRoleError(pub String);

impl fmt::Display for ParseChatRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chat role '{}', expected 'user' or 'bot'", self.0)
    }
}

impl std::error::Error for ParseChatRoleError {}

impl FromStr for ChatRole {
    type Err = ParseChatRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "bot" => Ok(ChatRole::Bot),
            other => Err(ParseChatRoleError(other.to_string())),
        }
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaveChatRequest {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaveChatResponse {
    pub message: String,
}

impl SaveChatResponse {
    pub fn saved() -> Self {
        Self {
            message: CHAT_SAVED_MESSAGE.to_string(),
        }
    }
}

/// One entry of the `GET /api/chat` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    #[ts(type = "number")]
    pub id: i64,
    pub role: ChatRole,
    pub text: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}
