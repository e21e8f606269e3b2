// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request state controller shared by all screens
//!
//! One controller instance per screen. Each request moves through
//! Idle -> Loading -> Success | Failed; submit is gated while a request is
//! in flight and while required fields are empty. The single result slot is
//! last-writer-wins: whatever the in-flight call returns is applied, even
//! if the form changed in the meantime.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{Result, ShporaError};
use crate::history::HistoryStore;

use super::ScreenConfig;

/// Phase of the current (or last) request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing submitted yet, or form reset
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced a result
    Success,
    /// The last request failed; the error message is the displayed output
    Failed,
}

/// Current form field values for a screen
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Main input field
    pub input: String,
    /// Title field (notes screen only)
    pub title: String,
    /// Selected template index, None until the user picks one
    pub selected_template: Option<usize>,
    /// Selected option index per select control, parallel to config.selects
    pub selections: Vec<usize>,
}

/// Controller driving one screen's request lifecycle
#[derive(Debug, Clone)]
pub struct ScreenController {
    config: ScreenConfig,
    /// Live form values, edited by the UI
    pub form: FormState,
    phase: RequestPhase,
    result: Option<String>,
    error: Option<String>,
    history: Option<HistoryStore>,
    in_flight_input: Option<String>,
}

impl ScreenController {
    /// Create a controller for a screen configuration
    pub fn new(config: ScreenConfig) -> Self {
        let form = FormState {
            input: String::new(),
            title: String::new(),
            selected_template: config.default_template,
            selections: vec![0; config.selects.len()],
        };
        let history = config.keeps_history.then(HistoryStore::new);

        Self {
            config,
            form,
            phase: RequestPhase::Idle,
            result: None,
            error: None,
            history,
            in_flight_input: None,
        }
    }

    /// The screen configuration
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Current request phase
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// The displayed result text (markdown), if the last request succeeded
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The displayed error message, if the last request failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The screen's history, if it keeps one
    pub fn history(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    /// Whether submit is currently available: no request in flight, all
    /// required fields non-empty, and a template chosen
    pub fn can_submit(&self) -> bool {
        if self.is_loading() {
            return false;
        }
        if self.form.input.trim().is_empty() {
            return false;
        }
        if self.config.title_field && self.form.title.trim().is_empty() {
            return false;
        }
        self.form.selected_template.is_some()
    }

    /// Build the prompt and enter Loading.
    ///
    /// Rejects the submit while a request is in flight or while required
    /// input is missing. On success the previous result or error is
    /// cleared and the prompt text is returned for dispatch.
    pub fn begin(&mut self) -> Result<String> {
        if self.is_loading() {
            return Err(ShporaError::InvalidInput(
                "a request is already in flight".to_string(),
            ));
        }
        if !self.can_submit() {
            return Err(ShporaError::InvalidInput(
                "required input is missing".to_string(),
            ));
        }

        let Some(template_idx) = self.form.selected_template else {
            return Err(ShporaError::InvalidInput(
                "no template selected".to_string(),
            ));
        };
        let template = &self.config.templates[template_idx];

        let mut values = HashMap::new();
        values.insert(
            self.config.input_placeholder.to_string(),
            self.form.input.trim().to_string(),
        );
        for (spec, &selected) in self.config.selects.iter().zip(&self.form.selections) {
            values.insert(
                spec.placeholder.to_string(),
                spec.options[selected].name.to_string(),
            );
        }

        let prompt = template.render(&values)?;

        let history_input = if self.config.title_field {
            self.form.title.trim().to_string()
        } else {
            self.form.input.trim().to_string()
        };

        self.phase = RequestPhase::Loading;
        self.result = None;
        self.error = None;
        self.in_flight_input = Some(history_input);

        tracing::debug!(screen = %self.config.kind, template = %template.id, "request started");

        Ok(prompt)
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// A success stores the text in the result slot and appends to history
    /// on screens that keep one; a failure stores the error message in
    /// place of a result. Either way the request is terminal: resubmitting
    /// is the only recovery.
    pub fn finish(&mut self, outcome: std::result::Result<String, String>) {
        let input = self.in_flight_input.take().unwrap_or_default();

        match outcome {
            Ok(text) => {
                self.phase = RequestPhase::Success;
                self.error = None;
                if let Some(history) = &mut self.history {
                    history.append(input, text.clone());
                }
                self.result = Some(text);
                if self.config.clears_on_success {
                    self.form.input.clear();
                    self.form.title.clear();
                }
            }
            Err(message) => {
                tracing::warn!(screen = %self.config.kind, error = %message, "request failed");
                self.phase = RequestPhase::Failed;
                self.result = None;
                self.error = Some(message);
            }
        }
    }

    /// Step the template selection by delta (wrapping). No-op while loading.
    pub fn cycle_template(&mut self, delta: isize) {
        if self.is_loading() || self.config.templates.is_empty() {
            return;
        }
        let len = self.config.templates.len() as isize;
        let current = self.form.selected_template.map(|i| i as isize).unwrap_or(-1);
        let next = (current + delta).rem_euclid(len);
        self.form.selected_template = Some(next as usize);
    }

    /// Step a select control's option by delta (wrapping). No-op while loading.
    pub fn cycle_option(&mut self, select_idx: usize, delta: isize) {
        if self.is_loading() {
            return;
        }
        if let Some(spec) = self.config.selects.get(select_idx) {
            let len = spec.options.len() as isize;
            let current = self.form.selections[select_idx] as isize;
            self.form.selections[select_idx] = (current + delta).rem_euclid(len) as usize;
        }
    }

    /// Remove one history entry
    pub fn remove_history_entry(&mut self, id: Uuid) -> bool {
        self.history
            .as_mut()
            .map(|h| h.remove(id))
            .unwrap_or(false)
    }

    /// Clear the history list
    pub fn clear_history(&mut self) {
        if let Some(history) = &mut self.history {
            history.clear();
        }
    }

    /// Restore a history entry's input and output into the form.
    /// Returns false when the entry does not exist. No-op while loading.
    pub fn load_history_entry(&mut self, id: Uuid) -> bool {
        if self.is_loading() {
            return false;
        }
        let Some(entry) = self.history.as_ref().and_then(|h| h.get(id)).cloned() else {
            return false;
        };

        if self.config.title_field {
            self.form.title = entry.input;
        } else {
            self.form.input = entry.input;
        }
        self.result = Some(entry.output);
        self.error = None;
        self.phase = RequestPhase::Success;
        true
    }
}
