//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the grapheme table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::canceller::VowelCanceller;
use crate::font::FontProfile;
use crate::mapper::MapOptions;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub defaults: DefaultSettings,
    #[serde(default)]
    pub loanwords: LoanwordSettings,
}

impl Settings {
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            normalize_endings: self.loanwords.normalize_endings,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultSettings {
    canceller: String,
    font: String,
    #[serde(skip)]
    canceller_parsed: VowelCanceller,
    #[serde(skip)]
    font_parsed: FontProfile,
}

impl DefaultSettings {
    /// The configured canceller, before font negotiation.
    pub fn canceller(&self) -> VowelCanceller {
        self.canceller_parsed
    }

    pub fn font(&self) -> FontProfile {
        self.font_parsed
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanwordSettings {
    #[serde(default)]
    pub normalize_endings: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

    s.defaults.canceller_parsed = VowelCanceller::from_symbol(&s.defaults.canceller)
        .ok_or_else(|| SettingsError::InvalidValue {
            field: "defaults.canceller".to_string(),
            reason: format!(
                "unknown canceller {:?}, expected one of + x ] _",
                s.defaults.canceller
            ),
        })?;
    s.defaults.font_parsed =
        FontProfile::from_name(&s.defaults.font).ok_or_else(|| SettingsError::InvalidValue {
            field: "defaults.font".to_string(),
            reason: format!("unknown font {:?}", s.defaults.font),
        })?;

    Ok(s)
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings_toml(&content)
}
