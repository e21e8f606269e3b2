// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Shpora
//!
//! Handles loading and saving settings from ~/.shpora/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Main settings structure, stored in ~/.shpora/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Generation provider configurations
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Default generation parameters
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Configuration for generation providers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    /// Google Gemini configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_gemini_api_key_env")]
    pub api_key_env: String,

    /// Default model to use
    #[serde(default = "default_gemini_model")]
    pub default_model: String,

    /// Base URL for API (for custom endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_gemini_api_key_env(),
            default_model: default_gemini_model(),
            base_url: None,
        }
    }
}

/// Default generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sampling temperature for generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens in a generated response
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Default target language code for the language helper
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            language: default_language(),
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Show token usage in the status bar
    #[serde(default)]
    pub show_token_count: bool,

    /// Theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            show_token_count: false,
            theme: default_theme(),
        }
    }
}

fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_language() -> String {
    "en".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::shpora_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the shpora home directory (~/.shpora or $SHPORA_HOME).
    pub fn shpora_home() -> PathBuf {
        if let Ok(home) = std::env::var("SHPORA_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shpora")
    }

    /// Ensure the settings directory exists.
    pub fn ensure_directories() -> Result<()> {
        let home = Self::shpora_home();
        if !home.exists() {
            std::fs::create_dir_all(&home)?;
        }
        Ok(())
    }

    /// Resolve the Gemini API key: inline key first, then environment.
    pub fn get_gemini_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.providers.gemini.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var(&self.providers.gemini.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
    }
}
