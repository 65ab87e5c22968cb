use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL; when absent the server runs on the
    /// in-memory store.
    #[serde(default)]
    pub postgres_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "supermatech-api.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            postgres_url: None,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", config_path, e))?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", config_path, e))?;
        Ok(config)
    }

    /// Load `config/{env}.yaml`, falling back to defaults when the file
    /// is missing (dev convenience).
    pub fn load_or_default(env: &str) -> Self {
        match Self::load(env) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} - using default configuration", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_runs_on_memory_store() {
        let config = AppConfig::default();
        assert!(config.postgres_url.is_none());
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn config_parses_from_yaml() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: api.log
use_json: true
rotation: hourly
gateway:
  host: 127.0.0.1
  port: 9090
postgres_url: postgres://localhost/supermatech
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 9090);
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgres://localhost/supermatech")
        );
    }
}
