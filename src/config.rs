// Configuration for the portfolio viewer
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/folio/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Also write JSON logs to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: dirs::home_dir()
                .map(|p| p.join(".local").join("share").join("folio").join("logs"))
                .unwrap_or_else(|| PathBuf::from("folio-logs")),
            file_prefix: "folio".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Typing effect on the hero role lines (off unless enabled)
    pub typing_effect: bool,

    /// Visibility watcher for reveals and lazy images; when false,
    /// reveals apply immediately and images load eagerly
    pub observer: bool,

    /// Lead distance for the active-section highlight, in units
    pub active_offset: u32,

    /// Anchor-scroll correction for the fixed navbar, in units
    pub navbar_height: u32,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            typing_effect: false,
            observer: true,
            active_offset: 200,
            navbar_height: 80,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging settings as loaded from the config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (everything optional, defaults fill the gaps)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    typing_effect: Option<bool>,
    observer: Option<bool>,
    active_offset: Option<u32>,
    navbar_height: Option<u32>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create the config template if it doesn't exist, so users can
    /// discover the options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Config::default().to_toml());
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file().unwrap_or_default();
        let defaults = Config::default();
        let default_logging = LoggingConfig::default();

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: env_str("FOLIO_LOG")
                .or(file_logging.level)
                .unwrap_or(default_logging.level),
            file_enabled: env_bool("FOLIO_LOG_FILE")
                .or(file_logging.file_enabled)
                .unwrap_or(default_logging.file_enabled),
            file_dir: env_str("FOLIO_LOG_DIR")
                .or(file_logging.file_dir)
                .map(PathBuf::from)
                .unwrap_or(default_logging.file_dir),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(default_logging.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(default_logging.file_rotation),
        };

        Self {
            theme: env_str("FOLIO_THEME")
                .or(file.theme)
                .unwrap_or(defaults.theme),
            typing_effect: env_bool("FOLIO_TYPING")
                .or(file.typing_effect)
                .unwrap_or(defaults.typing_effect),
            observer: env_bool("FOLIO_OBSERVER")
                .or(file.observer)
                .unwrap_or(defaults.observer),
            active_offset: env_u32("FOLIO_ACTIVE_OFFSET")
                .or(file.active_offset)
                .unwrap_or(defaults.active_offset),
            navbar_height: env_u32("FOLIO_NAVBAR_HEIGHT")
                .or(file.navbar_height)
                .unwrap_or(defaults.navbar_height),
            logging,
        }
    }

    fn load_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Render the config as a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration
# Values here are overridden by FOLIO_* environment variables.

# Theme: "auto", "dracula", "nord", "gruvbox"
theme = "{theme}"

# Typing effect on the hero role lines (must be explicitly enabled)
typing_effect = {typing}

# Visibility watcher for reveals and lazy images.
# When false, reveals apply immediately and images load eagerly.
observer = {observer}

# Lead distance for the active-section highlight, in units
active_offset = {active_offset}

# Anchor-scroll correction for the fixed navbar, in units
navbar_height = {navbar_height}

[logging]
# Log level: trace, debug, info, warn, error
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation: hourly, daily, never
file_rotation = "{rotation}"
"#,
            theme = self.theme,
            typing = self.typing_effect,
            observer = self.observer,
            active_offset = self.active_offset,
            navbar_height = self.navbar_height,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.as_str(),
        )
    }
}

fn env_str(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    env_str(key).map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u32(key: &str) -> Option<u32> {
    env_str(key).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = Config::default();
        assert_eq!(config.active_offset, 200);
        assert_eq!(config.navbar_height, 80);
        assert!(!config.typing_effect);
        assert!(config.observer);
    }

    #[test]
    fn test_template_round_trips() {
        let rendered = Config::default().to_toml();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.theme.as_deref(), Some("auto"));
        assert_eq!(parsed.typing_effect, Some(false));
        assert_eq!(parsed.active_offset, Some(200));
        let logging = parsed.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
    }

    #[test]
    fn test_rotation_parse_is_forgiving() {
        assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("never"), LogRotation::Never);
        assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    }
}
