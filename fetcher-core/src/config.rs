use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::{
    parse::ParserKind,
    request::{DEFAULT_BASE_URL, encode_city},
};

pub const DEFAULT_CITY: &str = "Holly+Springs";

pub const ENV_API_KEY: &str = "WEATHER_FETCHER_API_KEY";
pub const ENV_CITY: &str = "WEATHER_FETCHER_CITY";
pub const ENV_BASE_URL: &str = "WEATHER_FETCHER_BASE_URL";
pub const ENV_PARSER: &str = "WEATHER_FETCHER_PARSER";

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// city = "Holly+Springs"
/// parser = "markers"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub city: Option<String>,
    pub base_url: Option<String>,
    pub parser: Option<String>,
}

/// Validated values the fetch pipeline runs with.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub city: String,
    pub api_key: String,
    pub parser: ParserKind,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("city", &self.city)
            .field("api_key", &"<redacted>")
            .field("parser", &self.parser)
            .finish()
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-fetcher", "weather-fetcher")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|name| env::var(name).ok())
    }

    /// Overlay values from `lookup`, keyed by the `WEATHER_FETCHER_*` variable names.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slots = [
            (ENV_API_KEY, &mut self.api_key),
            (ENV_CITY, &mut self.city),
            (ENV_BASE_URL, &mut self.base_url),
            (ENV_PARSER, &mut self.parser),
        ];

        for (name, slot) in slots {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                *slot = Some(value);
            }
        }

        self
    }

    /// Validate and fill in defaults. Spaces in the city become `+`.
    pub fn resolve(&self) -> Result<Settings> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `weather-fetcher configure` or set {ENV_API_KEY}."
                )
            })?;

        let city = self.city.as_deref().unwrap_or(DEFAULT_CITY).trim();
        if city.is_empty() {
            return Err(anyhow!("Configured city is empty."));
        }

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim();
        if base_url.is_empty() {
            return Err(anyhow!("Configured base URL is empty."));
        }

        let parser = match self.parser.as_deref() {
            Some(p) => ParserKind::try_from(p)?,
            None => ParserKind::default(),
        };

        Ok(Settings {
            base_url: base_url.to_string(),
            city: encode_city(city),
            api_key: api_key.to_string(),
            parser,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.resolve().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn keyed() -> Config {
        Config { api_key: Some("KEY".into()), ..Config::default() }
    }

    #[test]
    fn resolve_errors_without_api_key() {
        let err = Config::default().resolve().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("weather-fetcher configure"));

        let blank = Config { api_key: Some("  ".into()), ..Config::default() };
        assert!(!blank.is_configured());
    }

    #[test]
    fn resolve_fills_defaults() {
        let settings = keyed().resolve().unwrap();
        assert_eq!(settings.api_key, "KEY");
        assert_eq!(settings.city, DEFAULT_CITY);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.parser, ParserKind::Markers);
    }

    #[test]
    fn resolve_encodes_city() {
        let cfg = Config { city: Some("Holly Springs".into()), ..keyed() };
        assert_eq!(cfg.resolve().unwrap().city, "Holly+Springs");
    }

    #[test]
    fn resolve_rejects_unknown_parser_and_empty_city() {
        let cfg = Config { parser: Some("xml".into()), ..keyed() };
        assert!(cfg.resolve().unwrap_err().to_string().contains("Unknown parser"));

        let cfg = Config { city: Some(" ".into()), ..keyed() };
        assert!(cfg.resolve().unwrap_err().to_string().contains("city is empty"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let env: HashMap<&str, &str> =
            [(ENV_CITY, "Phoenix"), (ENV_PARSER, "json"), (ENV_API_KEY, "")].into();

        let cfg = Config { city: Some("Raleigh".into()), ..keyed() }
            .with_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(cfg.city.as_deref(), Some("Phoenix"));
        assert_eq!(cfg.parser.as_deref(), Some("json"));
        // Blank variables don't clobber what the file had.
        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.base_url, None);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config { city: Some("Phoenix".into()), parser: Some("json".into()), ..keyed() };
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);

        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert!(Config::from_toml("city = 3").is_err());
    }

    #[test]
    fn settings_debug_hides_key() {
        let settings = keyed().resolve().unwrap();
        assert!(!format!("{settings:?}").contains("KEY"));
    }
}
