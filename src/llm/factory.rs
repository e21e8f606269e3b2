// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Provider factory for creating generation providers
//!
//! Centralizes provider creation so the TUI and one-shot CLI paths share
//! the same credential resolution.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::{Result, ShporaError};
use crate::llm::provider::GenerationProvider;
use crate::llm::providers::GeminiProvider;

/// Factory for creating generation providers
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the generation provider from settings.
    ///
    /// The API key is resolved at startup from the settings file or the
    /// configured environment variable; it is never compiled in.
    pub fn create(settings: &Settings) -> Result<Arc<dyn GenerationProvider>> {
        let api_key = settings.get_gemini_api_key().ok_or_else(|| {
            ShporaError::Config(format!(
                "No Gemini API key found. Set the {} env var or run 'shpora settings'.",
                settings.providers.gemini.api_key_env
            ))
        })?;

        let provider = if let Some(ref base_url) = settings.providers.gemini.base_url {
            GeminiProvider::with_base_url(api_key, base_url)
        } else {
            GeminiProvider::new(api_key)
        };

        Ok(Arc::new(provider))
    }

    /// Get the default model from settings
    pub fn default_model(settings: &Settings) -> String {
        settings.providers.gemini.default_model.clone()
    }

    /// Check if the provider is configured (has a credential)
    pub fn is_configured(settings: &Settings) -> bool {
        settings.get_gemini_api_key().is_some()
    }
}
