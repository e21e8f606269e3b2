// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Screen definitions for Shpora
//!
//! Each screen is pure configuration (templates, fields, option lists)
//! driving one shared controller. The prompt texts and option sets are the
//! product's fixed data and stay in Russian; identifiers are English.

pub mod cheatsheet;
pub mod controller;
pub mod essay;
pub mod language;
pub mod math;
pub mod notes;

pub use controller::{FormState, RequestPhase, ScreenController};

use crate::prompt::PromptTemplate;

/// The five screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Cheatsheet,
    Essay,
    Language,
    Math,
    Notes,
}

impl ScreenKind {
    /// All screens in display order
    pub const ALL: [ScreenKind; 5] = [
        ScreenKind::Cheatsheet,
        ScreenKind::Essay,
        ScreenKind::Language,
        ScreenKind::Math,
        ScreenKind::Notes,
    ];

    /// Screen title shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            ScreenKind::Cheatsheet => "Cheatsheet",
            ScreenKind::Essay => "Essay",
            ScreenKind::Language => "Language",
            ScreenKind::Math => "Math",
            ScreenKind::Notes => "Notes",
        }
    }

    /// Stable identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ScreenKind::Cheatsheet => "cheatsheet",
            ScreenKind::Essay => "essay",
            ScreenKind::Language => "language",
            ScreenKind::Math => "math",
            ScreenKind::Notes => "notes",
        }
    }

    /// The screen's configuration
    pub fn config(&self) -> ScreenConfig {
        match self {
            ScreenKind::Cheatsheet => cheatsheet::config(),
            ScreenKind::Essay => essay::config(),
            ScreenKind::Language => language::config(),
            ScreenKind::Math => math::config(),
            ScreenKind::Notes => notes::config(),
        }
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ScreenKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| format!("unknown screen '{}'", s))
    }
}

/// One option in a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Stable identifier (e.g. a language code)
    pub id: &'static str,
    /// Display name; this is the value substituted into the prompt
    pub name: &'static str,
}

/// A select control bound to a template placeholder
#[derive(Debug, Clone)]
pub struct SelectSpec {
    /// Placeholder name the selection binds
    pub placeholder: &'static str,
    /// Label shown next to the control
    pub label: &'static str,
    /// The enumerated options
    pub options: Vec<SelectOption>,
}

impl SelectSpec {
    /// Find an option index by its identifier
    pub fn option_index(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }
}

/// Static configuration for one screen
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Which screen this is
    pub kind: ScreenKind,

    /// Placeholder name bound from the main input field
    pub input_placeholder: &'static str,

    /// Hint text shown in the empty input field
    pub input_hint: &'static str,

    /// Whether the screen has a required title field (notes)
    pub title_field: bool,

    /// Prompt templates; selectable in the UI when more than one
    pub templates: Vec<PromptTemplate>,

    /// Initially selected template, None when the user must pick first
    pub default_template: Option<usize>,

    /// Select controls (essay type, target language)
    pub selects: Vec<SelectSpec>,

    /// Whether successful generations are kept in a history list
    pub keeps_history: bool,

    /// Whether the form is cleared after a successful generation (notes)
    pub clears_on_success: bool,
}

impl ScreenConfig {
    /// Find a template index by its identifier
    pub fn template_index(&self, id: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_kind_ids_are_unique() {
        let mut ids: Vec<_> = ScreenKind::ALL.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_screen_kind_from_str() {
        assert_eq!("math".parse::<ScreenKind>().unwrap(), ScreenKind::Math);
        assert!("bogus".parse::<ScreenKind>().is_err());
    }

    #[test]
    fn test_all_configs_build() {
        for kind in ScreenKind::ALL {
            let config = kind.config();
            assert_eq!(config.kind, kind);
            assert!(!config.templates.is_empty());
            if let Some(idx) = config.default_template {
                assert!(idx < config.templates.len());
            }
        }
    }

    #[test]
    fn test_history_screens() {
        assert!(ScreenKind::Math.config().keeps_history);
        assert!(ScreenKind::Notes.config().keeps_history);
        assert!(!ScreenKind::Cheatsheet.config().keeps_history);
        assert!(!ScreenKind::Essay.config().keeps_history);
        assert!(!ScreenKind::Language.config().keeps_history);
    }

    #[test]
    fn test_select_placeholders_appear_in_templates() {
        // Every select control's placeholder is referenced by at least one
        // template of its screen.
        for kind in ScreenKind::ALL {
            let config = kind.config();
            for select in &config.selects {
                let used = config
                    .templates
                    .iter()
                    .any(|t| t.placeholders().contains(&select.placeholder.to_string()));
                assert!(used, "{:?} select '{}' unused", kind, select.placeholder);
            }
        }
    }

    #[test]
    fn test_templates_only_use_known_placeholders() {
        for kind in ScreenKind::ALL {
            let config = kind.config();
            let mut known: Vec<String> = vec![config.input_placeholder.to_string()];
            known.extend(config.selects.iter().map(|s| s.placeholder.to_string()));

            for template in &config.templates {
                for placeholder in template.placeholders() {
                    assert!(
                        known.contains(&placeholder),
                        "{:?} template '{}' references unknown placeholder '{}'",
                        kind,
                        template.id,
                        placeholder
                    );
                }
            }
        }
    }
}
