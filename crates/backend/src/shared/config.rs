use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with static assets (card images); not served when absent
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory with posts.json / tools.json / creators.json.
    /// When absent the catalogs embedded into the binary are used.
    #[serde(default)]
    pub data_dir: Option<String>,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Image shown instead of a card image that already appeared in the listing
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_locale() -> String {
    "ar".to_string()
}

fn default_fallback_image() -> String {
    "/images/placeholder.svg".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_locale: default_locale(),
            fallback_image: default_fallback_image(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
default_locale = "ar"
fallback_image = "/images/placeholder.svg"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve a configured path
/// Relative paths are resolved relative to the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let candidate = Path::new(path);

    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(candidate);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.default_locale, "ar");
        assert!(config.catalog.data_dir.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[catalog]\ndata_dir = \"data\"\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog.data_dir.as_deref(), Some("data"));
        assert_eq!(config.catalog.fallback_image, "/images/placeholder.svg");
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[server]\nport = \"abc\"\n").is_err());
    }

    #[test]
    fn test_absolute_path_kept() {
        let abs = if cfg!(windows) { "C:\\data" } else { "/srv/data" };
        assert_eq!(resolve_path(abs), PathBuf::from(abs));
    }
}
