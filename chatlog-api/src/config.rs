use actix_web::http::Uri;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CHATLOG";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// `["*"]` allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Rejects origins the CORS middleware would refuse at server start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            let uri = origin.parse::<Uri>().map_err(|e| {
                ConfigError::Message(format!("Invalid CORS origin '{}': {}", origin, e))
            })?;
            if uri.scheme().is_none() || uri.host().is_none() {
                return Err(ConfigError::Message(format!(
                    "Invalid CORS origin '{}': expected scheme://host[:port]",
                    origin
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}

impl ApiConfig {
    /// Layers defaults, `~/.config/chatlog/api.toml`, the explicit file (if
    /// any) and `CHATLOG__*` environment variables, later sources winning.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "database.path",
                defaults.database.path.to_string_lossy().into_owned(),
            )?
            .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(File::from(get_config_path()).required(false));

        let builder = match explicit_path {
            Some(path) => builder.add_source(File::from(path.to_path_buf()).required(true)),
            None => builder,
        };

        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        let mut config: ApiConfig = builder.build()?.try_deserialize()?;
        config.cors.validate()?;

        config.database.path = expand_tilde(&config.database.path);
        if let Some(file) = config.logging.file.take() {
            config.logging.file = Some(expand_tilde(&file));
        }

        Ok(config)
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("chatlog/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("chatlog/chat.db")
    } else {
        PathBuf::from("chat.db")
    }
}
