use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Base URL of the Bot API. Overridable so tests can point the sink at
    /// a local server.
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                addr: "0.0.0.0:5000".to_string(),
            },
            telegram: TelegramConfig {
                api_base: "https://api.telegram.org".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load() -> crate::Result<Self> {
        // Load environment variables from .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Config {
            server: ServerConfig {
                addr: std::env::var("SERVER_ADDR")
                    .unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            },
            telegram: TelegramConfig {
                api_base: std::env::var("TELEGRAM_API_BASE")
                    .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            },
        };

        // The addr must at least split into host and port
        if !config.server.addr.contains(':') {
            return Err(crate::Error::Config(format!(
                "Invalid server address: {}",
                config.server.addr
            )));
        }

        Ok(config)
    }
}
