//! Configuration for the theme sync tool
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables
//! 3. Config file (~/.config/catppuccin-blur/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The defaults reproduce the reference behavior exactly: medium blur level,
//! upstream Catppuccin Mauve theme, output at themes/catppuccin-blur.json.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upstream Catppuccin theme for Zed (mauve accent)
const DEFAULT_THEME_URL: &str =
    "https://raw.githubusercontent.com/catppuccin/zed/main/themes/catppuccin-mauve.json";

/// Zed theme JSON Schema, referenced from the output via `$schema`
const DEFAULT_SCHEMA_URL: &str = "https://zed.dev/schema/themes/v0.2.0.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the upstream theme family JSON
    pub theme_url: String,

    /// URL of the theme JSON Schema
    pub schema_url: String,

    /// Where the merged theme file is written
    pub output_path: PathBuf,

    /// On-disk schema cache (7-day freshness window)
    pub schema_cache: PathBuf,

    /// Blur intensity: "light", "medium", "heavy"
    pub level: String,

    /// Validate the merged document against the schema before writing
    pub validate: bool,

    /// Log level when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_url: DEFAULT_THEME_URL.to_string(),
            schema_url: DEFAULT_SCHEMA_URL.to_string(),
            output_path: PathBuf::from("themes/catppuccin-blur.json"),
            schema_cache: default_schema_cache(),
            level: "medium".to_string(),
            validate: true,
            log_level: "info".to_string(),
        }
    }
}

fn default_schema_cache() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join("catppuccin-blur").join("theme-schema.json"))
        .unwrap_or_else(|| PathBuf::from(".theme-schema.json"))
}

/// Config file structure (everything optional, falls back per-field)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme_url: Option<String>,
    pub schema_url: Option<String>,
    pub output_path: Option<String>,
    pub schema_cache: Option<String>,
    pub level: Option<String>,
    pub validate: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Get the config file path: ~/.config/catppuccin-blur/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("catppuccin-blur").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A broken config fails fast with a clear error rather than silently
    /// falling back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {e}");
                    eprintln!("  To reset, delete the file and rerun catppuccin-blur.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let theme_url = std::env::var("CATPPUCCIN_BLUR_THEME_URL")
            .ok()
            .or(file.theme_url)
            .unwrap_or(defaults.theme_url);

        let schema_url = std::env::var("CATPPUCCIN_BLUR_SCHEMA_URL")
            .ok()
            .or(file.schema_url)
            .unwrap_or(defaults.schema_url);

        let output_path = std::env::var("CATPPUCCIN_BLUR_OUTPUT")
            .ok()
            .or(file.output_path)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        let schema_cache = file
            .schema_cache
            .map(PathBuf::from)
            .unwrap_or(defaults.schema_cache);

        let level = std::env::var("CATPPUCCIN_BLUR_LEVEL")
            .ok()
            .or(file.level)
            .unwrap_or(defaults.level);

        let validate = file.validate.unwrap_or(defaults.validate);

        let log_level = std::env::var("CATPPUCCIN_BLUR_LOG")
            .ok()
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        Self {
            theme_url,
            schema_url,
            output_path,
            schema_cache,
            level,
            validate,
            log_level,
        }
    }

    /// Render the config as a commented TOML template.
    /// Single source of truth for `ensure_config_exists` and `config --reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# catppuccin-blur configuration
# Delete a line to fall back to the built-in default.

# Upstream theme family JSON
theme_url = {theme_url:?}

# Theme JSON Schema (referenced from the output via $schema)
schema_url = {schema_url:?}

# Where the merged theme file is written
output_path = {output_path:?}

# On-disk schema cache (refetched after 7 days)
schema_cache = {schema_cache:?}

# Blur intensity: "light", "medium", "heavy"
level = {level:?}

# Validate the merged document against the schema before writing
validate = {validate}

# Log level when RUST_LOG is unset: "error", "warn", "info", "debug", "trace"
log_level = {log_level:?}
"#,
            theme_url = self.theme_url,
            schema_url = self.schema_url,
            output_path = self.output_path.display().to_string(),
            schema_cache = self.schema_cache.display().to_string(),
            level = self.level,
            validate = self.validate,
            log_level = self.log_level,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.level, "medium");
        assert_eq!(config.output_path, PathBuf::from("themes/catppuccin-blur.json"));
        assert!(config.validate);
        assert!(config.theme_url.contains("catppuccin"));
    }

    #[test]
    fn test_config_template_round_trips() {
        let toml_str = Config::default().to_toml();
        let parsed: FileConfig = toml::from_str(&toml_str).expect("template should parse");
        assert_eq!(parsed.level.as_deref(), Some("medium"));
        assert_eq!(parsed.validate, Some(true));
    }

    #[test]
    fn test_file_config_accepts_partial_files() {
        let parsed: FileConfig = toml::from_str(r#"level = "heavy""#).unwrap();
        assert_eq!(parsed.level.as_deref(), Some("heavy"));
        assert!(parsed.theme_url.is_none());
        assert!(parsed.validate.is_none());
    }

    #[test]
    fn test_empty_file_config_is_all_defaults() {
        let parsed: FileConfig = toml::from_str("").unwrap();
        assert!(parsed.theme_url.is_none());
        assert!(parsed.output_path.is_none());
    }
}
