use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, IdentityConfig, LogLevel, LoggingConfig,
    ServerConfig, SessionConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for XB_CONFIG_DIR env var, else use ./.xibalba/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply XB_* environment variable overrides
    /// 5. Check for legacy ~/.xibalba/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.warn_on_legacy_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: XB_CONFIG_DIR env var > ./.xibalba/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("XB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".xibalba"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("XB_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("XB_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            } else {
                warn!("Ignoring non-numeric XB_SERVER_PORT: {}", port);
            }
        }
        if let Ok(token) = std::env::var("XB_ADMIN_TOKEN") {
            self.server.admin_token = Some(token);
        }
        if let Ok(path) = std::env::var("XB_DATABASE_PATH") {
            self.database.path = path;
        }
        if let Ok(secret) = std::env::var("XB_SESSION_SECRET") {
            self.session.secret = Some(secret);
        }
        if let Ok(provider) = std::env::var("XB_IDENTITY_PROVIDER") {
            self.identity.provider = provider;
        }
        if let Ok(client_id) = std::env::var("XB_GOOGLE_CLIENT_ID") {
            self.identity.google_client_id = Some(client_id);
        }
        if let Ok(level) = std::env::var("XB_LOG_LEVEL") {
            // FromStr is total; unknown strings fall back to info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
    }

    /// Warn when an abandoned home-directory config would be silently ignored
    fn warn_on_legacy_config(&self, config_dir: &std::path::Path) {
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".xibalba").join("config.toml");
            if legacy.exists() && legacy.parent() != Some(config_dir) {
                warn!(
                    "Legacy config at {} is ignored; active config dir is {}",
                    legacy.display(),
                    config_dir.display()
                );
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.session.validate()?;
        self.identity.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  session: ttl {}s, secret {}",
            self.session.ttl_secs,
            if self.session.secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            }
        );
        info!("  identity provider: {}", self.identity.provider);
        info!(
            "  admin endpoints: {}",
            if self.server.admin_token.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
}
