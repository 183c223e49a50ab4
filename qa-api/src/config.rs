use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount point for the question and answer routes, e.g. `/api`
    pub path_prefix: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite file, or `:memory:` for a throwaway store
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Layers, lowest precedence first: built-in defaults,
    /// `~/.config/qa-api/api.toml`, `./qa-api.toml`, `explicit_path` (must
    /// exist when given), then `QA_API__SECTION__KEY` environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if let Some(config_dir) = dirs::config_dir() {
            builder = builder.add_source(File::from(config_dir.join("qa-api/api.toml")).required(false));
        }

        if let Ok(current_dir) = std::env::current_dir() {
            builder = builder.add_source(File::from(current_dir.join("qa-api.toml")).required(false));
        }

        if let Some(path) = explicit_path {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            Environment::with_prefix("QA_API")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        );

        Self::from_builder(builder)
    }

    /// Built-in defaults overlaid with `path` only; no user, working
    /// directory or environment layers.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_builder(Self::defaults()?.add_source(File::from(path.to_path_buf())))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.path_prefix", "")?
            .set_default("database.path", "qa.db")?
            .set_default("logging.level", "info")?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:3000".to_string()],
            )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut config: ApiConfig = builder.build()?.try_deserialize()?;

        // Expand tilde in database path
        if config.database.path.starts_with("~") {
            if let Some(home) = home::home_dir() {
                let path_str = config.database.path.to_string_lossy();
                let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
                config.database.path = PathBuf::from(expanded);
            }
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
