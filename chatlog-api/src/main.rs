use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use chatlog_api::config::ApiConfig;
use chatlog_api::logging::init_logging;
use chatlog_api::routes::{build_cors, configure_routes};
use chatlog_api::{SharedChatStore, SqliteChatStore};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "chatlog-api", version, about = "Append-only chat message log")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides server.host
    #[arg(long)]
    host: Option<String>,

    /// Overrides server.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _log_guard = init_logging(&config.logging)?;

    let store: SharedChatStore = Arc::new(
        SqliteChatStore::open(&config.database.path).context("Failed to open chat store")?,
    );
    let store = web::Data::new(store);
    let cors_config = config.cors.clone();

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting chatlog-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr.as_str())
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
