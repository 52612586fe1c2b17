//! Client configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (EDU_LIBRARY_SERVER, EDU_LIBRARY_USER_ID)
//! 2. Config file (.edu-library/config.yaml)
//! 3. Defaults (http://localhost:8000, user 0)
//!
//! Config file discovery:
//! - Searches current directory and parents for .edu-library/config.yaml
//! - Falls back to the user config dir (e.g. ~/.config/edu-library/config.yaml)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;

/// Default API origin when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const ENV_SERVER: &str = "EDU_LIBRARY_SERVER";
pub const ENV_USER_ID: &str = "EDU_LIBRARY_USER_ID";

const CONFIG_DIR: &str = ".edu-library";
const CONFIG_NAME: &str = "config.yaml";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub user: UserSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
    /// Backend origin, e.g. https://abc.ngrok-free.app
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    /// Send the tunnel interstitial bypass header
    pub skip_tunnel_warning: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSection {
    /// Platform user id that admin writes are attributed to
    pub id: Option<i64>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// API origin without trailing slash
    pub base_url: String,
    pub user_id: i64,
    /// Per-request timeout; `None` leaves it to the OS
    pub timeout: Option<Duration>,
    pub skip_tunnel_warning: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: 0,
            timeout: None,
            skip_tunnel_warning: true,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Replace the API origin
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = trim_base(base_url);
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }
}

/// Work out the API origin from the URL of the hosting page.
///
/// A `server` query parameter wins (one trailing slash stripped);
/// otherwise the page's own origin is used.
pub fn resolve_api_base(page_url: &str) -> Result<String> {
    let url = Url::parse(page_url).with_context(|| format!("Invalid page URL: {}", page_url))?;

    if let Some((_, server)) = url.query_pairs().find(|(k, _)| k == "server") {
        if !server.is_empty() {
            return Ok(server.strip_suffix('/').unwrap_or(&server).to_string());
        }
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        anyhow::bail!("Page URL has no usable origin: {}", page_url);
    }
    Ok(origin.ascii_serialization())
}

fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("edu-library").join(CONFIG_NAME);
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge file contents and environment values over the defaults
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env_server: Option<String>,
    env_user_id: Option<String>,
) -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig::default();

    if let Some((path, file)) = file {
        if let Some(base_url) = file.api.base_url {
            config.base_url = trim_base(&base_url);
        }
        config.timeout = file.api.timeout_seconds.map(Duration::from_secs);
        if let Some(skip) = file.api.skip_tunnel_warning {
            config.skip_tunnel_warning = skip;
        }
        if let Some(id) = file.user.id {
            config.user_id = id;
        }
        config.config_file = Some(path);
    }

    if let Some(server) = env_server.filter(|s| !s.is_empty()) {
        config.base_url = trim_base(&server);
    }

    if let Some(raw) = env_user_id.filter(|s| !s.is_empty()) {
        config.user_id = raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be an integer, got {:?}", ENV_USER_ID, raw))?;
    }

    Ok(config)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    resolve(
        file,
        std::env::var(ENV_SERVER).ok(),
        std::env::var(ENV_USER_ID).ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (skips the cache)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = resolve(None, None, None).unwrap();

        assert_eq!(config, ResolvedConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.user_id, 0);
        assert!(config.skip_tunnel_warning);
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join(CONFIG_NAME);
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
api:
  base_url: https://abc123.ngrok-free.app/
  timeout_seconds: 15
  skip_tunnel_warning: false
user:
  id: 424242
"#
        )
        .unwrap();

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.user.id, Some(424242));

        let config = resolve(Some((config_path.clone(), parsed)), None, None).unwrap();
        assert_eq!(config.base_url, "https://abc123.ngrok-free.app");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert!(!config.skip_tunnel_warning);
        assert_eq!(config.user_id, 424242);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = serde_yaml::from_str(
            "version: \"1\"\napi:\n  base_url: http://from-file:8000\nuser:\n  id: 1\n",
        )
        .unwrap();

        let config = resolve(
            Some((PathBuf::from("/x/config.yaml"), file)),
            Some("http://from-env:9000/".to_string()),
            Some(" 77 ".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://from-env:9000");
        assert_eq!(config.user_id, 77);
    }

    #[test]
    fn test_bad_user_id_env_is_an_error() {
        let err = resolve(None, None, Some("admin".to_string())).unwrap_err();
        assert!(err.to_string().contains(ENV_USER_ID));
    }

    #[test]
    fn test_resolve_api_base_prefers_server_param() {
        assert_eq!(
            resolve_api_base("https://app.example.com/library.html?server=https://abc.ngrok-free.app/").unwrap(),
            "https://abc.ngrok-free.app"
        );
        assert_eq!(
            resolve_api_base("https://app.example.com/library.html?server=http%3A%2F%2F10.0.0.2%3A8000").unwrap(),
            "http://10.0.0.2:8000"
        );
    }

    #[test]
    fn test_resolve_api_base_falls_back_to_origin() {
        assert_eq!(
            resolve_api_base("https://app.example.com:8443/webapp/library.html?tab=1").unwrap(),
            "https://app.example.com:8443"
        );
        assert_eq!(
            resolve_api_base("https://app.example.com/library.html?server=").unwrap(),
            "https://app.example.com"
        );
        assert!(resolve_api_base("not a url").is_err());
    }
}
