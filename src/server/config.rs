use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    database_url: Option<String>,
    listen_addr: Option<String>,
    log_dir: Option<String>,
    max_connections: Option<u32>,
}

fn default_database_url() -> String {
    "sqlite://todos.db?mode=rwc".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        PartialServerConfig::default().into_config()
    }
}

impl PartialServerConfig {
    fn from_file(config_path: Option<&str>) -> Result<Self, String> {
        let Some(path_str) = config_path else {
            return Ok(Self::default());
        };
        let path = Path::new(path_str);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))
    }

    /// Fields set on `self` win over `fallback`.
    fn or(self, fallback: Self) -> Self {
        Self {
            database_url: self.database_url.or(fallback.database_url),
            listen_addr: self.listen_addr.or(fallback.listen_addr),
            log_dir: self.log_dir.or(fallback.log_dir),
            max_connections: self.max_connections.or(fallback.max_connections),
        }
    }

    fn into_config(self) -> ServerConfig {
        ServerConfig {
            database_url: self.database_url.unwrap_or_else(default_database_url),
            listen_addr: self.listen_addr.unwrap_or_else(default_listen_addr),
            log_dir: self.log_dir.unwrap_or_else(default_log_dir),
            max_connections: self.max_connections.unwrap_or_else(default_max_connections),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration. Environment variables (and `.env`) override the TOML file,
    /// defaults fill whatever neither provides.
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        let file_config = PartialServerConfig::from_file(config_path)?;
        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))?;

        Ok(env_config.or(file_config).into_config())
    }
}
