use crate::config::ApiConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qa-api", version, about = "HTTP service for questions and their answers")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Args {
    pub fn apply(&self, config: &mut ApiConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig};

    fn base_config() -> ApiConfig {
        ApiConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                path_prefix: String::new(),
            },
            database: DatabaseConfig {
                path: PathBuf::from(":memory:"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
            cors: CorsConfig {
                allowed_origins: Vec::new(),
            },
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["qa-api", "--host", "0.0.0.0", "-p", "9000"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let args = Args::parse_from(["qa-api", "--config", "/etc/qa-api.toml"]);
        let mut config = base_config();

        args.apply(&mut config);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(args.config, Some(PathBuf::from("/etc/qa-api.toml")));
    }
}
