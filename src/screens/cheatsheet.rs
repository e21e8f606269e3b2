// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cheatsheet generator screen
//!
//! The user's request is sent to the model verbatim.

use super::{ScreenConfig, ScreenKind};
use crate::prompt::PromptTemplate;

pub fn config() -> ScreenConfig {
    ScreenConfig {
        kind: ScreenKind::Cheatsheet,
        input_placeholder: "text",
        input_hint: "Введите запрос для генерации шпаргалки (например, 'React Hooks', \
                     'JavaScript Promises', 'Python Data Structures')...",
        title_field: false,
        templates: vec![PromptTemplate::new("request", "Шпаргалка", "{text}")],
        default_template: Some(0),
        selects: vec![],
        keeps_history: false,
        clears_on_success: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_cheatsheet_prompt_is_verbatim() {
        let config = config();
        let mut values = HashMap::new();
        values.insert("text".to_string(), "React Hooks".to_string());

        let prompt = config.templates[0].render(&values).unwrap();
        assert_eq!(prompt, "React Hooks");
    }
}
