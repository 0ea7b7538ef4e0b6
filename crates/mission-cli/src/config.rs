use anyhow::{Context, Result};
use mission_web::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the JSON document everything is stored in
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// User recorded on activity entries that carry no better actor
    #[serde(default = "default_user")]
    pub default_user: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            server: ServerConfig::default(),
            default_user: default_user(),
        }
    }
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mission-control")
        .join("board.json")
}

fn default_user() -> String {
    "Adam".to_string()
}

fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mission-control").join("config.toml"))
}

impl AppConfig {
    /// Load configuration with precedence: defaults < file < env < flags.
    /// An explicitly passed config path must exist; the default path is
    /// allowed to be absent.
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => match default_config_file().filter(|p| p.exists()) {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path).with_context(|| {
                        format!("failed to read config file {}", path.display())
                    })?;
                    toml::from_str(&raw).with_context(|| {
                        format!("failed to parse config file {}", path.display())
                    })?
                }
                None => AppConfig::default(),
            },
        };

        if let Ok(path) = std::env::var("MISSION_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Ok(host) = std::env::var("MISSION_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("MISSION_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }

        Ok(config)
    }

    /// Apply CLI flag overrides, the last word in precedence
    pub fn apply_flags(
        &mut self,
        data_file: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }
}
