use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const PASSWORD_ENV: &str = "CMDPAL_PASSWORD";
pub const URL_ENV: &str = "CMDPAL_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub palette: PaletteConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub url: String,
    pub database: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8069".to_string(),
            database: None,
            login: None,
            password: None,
            user_id: None,
            project_id: None,
            model: "ofitec.command.palette".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Login and password, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.login, &self.password) {
            (Some(login), Some(password)) => Some((login.as_str(), password.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub focus_delay_ms: u64,
    pub auto_close_ms: u64,
    pub notification_ttl_ms: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            focus_delay_ms: 100,
            auto_close_ms: 2000,
            notification_ttl_ms: 4000,
        }
    }
}

impl PaletteConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn auto_close_delay(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("cmdpal");
        path
    })
}

impl AppConfig {
    /// Loads `path`, or `~/.config/cmdpal/config.toml` when none is given.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_dir() {
                Some(dir) => dir.join("config.toml"),
                None => return Ok(Self::default().with_env()),
            },
        };

        if !path.exists() {
            return Ok(Self::default().with_env());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
            .map(Self::with_env)
            .map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(URL_ENV).ok(),
            std::env::var(PASSWORD_ENV).ok(),
        )
    }

    fn with_overrides(mut self, url: Option<String>, password: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.service.url = url;
        }
        if let Some(password) = password.filter(|p| !p.is_empty()) {
            self.service.password = Some(password);
        }
        self
    }
}
