// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Notes creator screen
//!
//! The note content is sent to the model verbatim; the generated text is
//! stored as a note under the user's title. The form resets after a
//! successful generation.

use super::{ScreenConfig, ScreenKind};
use crate::prompt::PromptTemplate;

pub fn config() -> ScreenConfig {
    ScreenConfig {
        kind: ScreenKind::Notes,
        input_placeholder: "text",
        input_hint: "Введите содержание заметки...",
        title_field: true,
        templates: vec![PromptTemplate::new("note", "Заметка", "{text}")],
        default_template: Some(0),
        selects: vec![],
        keeps_history: true,
        clears_on_success: true,
    }
}
