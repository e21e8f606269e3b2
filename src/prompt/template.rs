// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt template type and placeholder substitution
//!
//! A template is fixed text containing `{name}` placeholders. Rendering
//! substitutes every occurrence of each placeholder with its bound value.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Result, ShporaError};

/// Regex pattern matching `{placeholder_name}` markers
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap());

/// A fixed prompt text with named substitution points
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    /// Stable identifier, unique within a screen
    pub id: String,

    /// Human-readable name shown in template pickers
    pub name: String,

    /// Template text with `{name}` placeholders
    pub text: String,
}

impl PromptTemplate {
    /// Create a new template
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// List the distinct placeholder names referenced by the template,
    /// in order of first appearance
    pub fn placeholders(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for caps in PLACEHOLDER_PATTERN.captures_iter(&self.text) {
            let name = caps[1].to_string();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Substitute every placeholder with its bound value.
    ///
    /// All occurrences of a placeholder are replaced, so a name may repeat
    /// in the template text. Substitution is a single pass over the
    /// template, so a value that happens to contain a marker stays
    /// literal. A placeholder with no bound value, or whose value is blank
    /// after trimming, is an error; values for names the template never
    /// mentions are ignored.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String> {
        for name in self.placeholders() {
            let value = values.get(&name).ok_or_else(|| {
                ShporaError::InvalidInput(format!(
                    "no value bound for placeholder '{{{}}}'",
                    name
                ))
            })?;

            if value.trim().is_empty() {
                return Err(ShporaError::InvalidInput(format!(
                    "value for placeholder '{{{}}}' is empty",
                    name
                )));
            }
        }

        let rendered = PLACEHOLDER_PATTERN
            .replace_all(&self.text, |caps: &regex::Captures| values[&caps[1]].clone());

        Ok(rendered.into_owned())
    }
}
