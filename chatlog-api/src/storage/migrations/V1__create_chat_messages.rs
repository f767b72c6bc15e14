/// Create the chat_messages table; timestamps are Unix milliseconds
pub fn migration() -> String {
    r#"
CREATE TABLE chat_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    role TEXT NOT NULL CHECK (role IN ('user', 'bot')),
    text TEXT NOT NULL,
    timestamp INTEGER NOT NULL
);

CREATE INDEX idx_chat_messages_timestamp
    ON chat_messages(timestamp, id);
"#.to_string()
}
