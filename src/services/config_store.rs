// Configuration Storage Service
// Loads the server/report settings file and applies environment overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors: true,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// How much of the analyzed text the report quotes.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { preview_chars: default_preview_chars() }
    }
}

fn default_version() -> String { CONFIG_VERSION.to_string() }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_max_body_bytes() -> usize { 2 * 1024 * 1024 }
fn default_true() -> bool { true }
fn default_preview_chars() -> usize { 1000 }

impl AppConfig {
    /// Apply `AI_DETECTOR_HOST` / `AI_DETECTOR_PORT` on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("AI_DETECTOR_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Ok(port) = std::env::var("AI_DETECTOR_PORT") {
            match port.trim().parse::<u16>() {
                Ok(p) => self.server.port = p,
                Err(_) => warn!(value = %port, "config.invalid_port_override"),
            }
        }
    }
}

pub struct ConfigStore {
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_file: config_dir.join("config.json") }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ai-detector"))
    }

    /// Store rooted at the default config directory, or `./config` if the
    /// platform has none.
    pub fn open_default() -> Self {
        Self::new(Self::default_config_dir().unwrap_or_else(|| PathBuf::from("config")))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Load configuration from file
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration, falling back to defaults on a broken file.
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %self.config_file.display(), "config.load_failed");
                AppConfig::default()
            }
        }
    }
}
