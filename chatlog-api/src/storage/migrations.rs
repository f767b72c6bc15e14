use refinery::embed_migrations;

embed_migrations!("src/storage/migrations");

/// Brings the chat schema up to date. Safe to call on every startup.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}
