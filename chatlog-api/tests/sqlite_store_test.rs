use chatlog_api::storage::run_migrations;
use chatlog_api::{ChatStore, NewMessage, SqliteChatStore};
use shared_types::ChatRole;
use tempfile::TempDir;

#[tokio::test]
async fn test_messages_survive_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("nested/chat.db");

    {
        let store = SqliteChatStore::open(&db_path)?;
        store.append(NewMessage::new(ChatRole::User, "hi")).await?;
        store.append(NewMessage::new(ChatRole::Bot, "hello")).await?;
    }

    let reopened = SqliteChatStore::open(&db_path)?;
    let messages = reopened.list_all().await?;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "hi");
    assert_eq!(messages[1].role, ChatRole::Bot);
    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("chat.db");

    let store = SqliteChatStore::open(&db_path)?;
    {
        let conn = store.connection();
        let mut conn = conn.lock().unwrap();
        run_migrations(&mut conn)?;

        let applied: i64 =
            conn.query_row("SELECT COUNT(*) FROM refinery_schema_history", [], |row| {
                row.get(0)
            })?;
        assert_eq!(applied, 1);
    }

    store.append(NewMessage::new(ChatRole::User, "still works")).await?;
    assert_eq!(store.list_all().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_appends_are_not_lost() -> anyhow::Result<()> {
    let store = SqliteChatStore::in_memory()?;

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .append(NewMessage::new(ChatRole::User, format!("msg-{}", i)))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let messages = store.list_all().await?;
    assert_eq!(messages.len(), 20);
    assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    Ok(())
}
