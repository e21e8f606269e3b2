// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Math solver screen
//!
//! A single fixed template asking for a step-by-step solution. Solved
//! problems are kept in the session history.

use super::{ScreenConfig, ScreenKind};
use crate::prompt::PromptTemplate;

const SOLVE_PROMPT: &str = r#"Реши следующую математическую задачу, показывая все шаги решения подробно и понятно для школьника. Если возможно, объясни принципы и формулы, которые используются. В конце напиши ответ.

Задача: {text}"#;

pub fn config() -> ScreenConfig {
    ScreenConfig {
        kind: ScreenKind::Math,
        input_placeholder: "text",
        input_hint: "Введите математическую задачу (например, 'Решите уравнение 2x+5=15', \
                     'Найдите производную функции y=x²+3x', 'Вычислите площадь круга с \
                     радиусом 5см')...",
        title_field: false,
        templates: vec![PromptTemplate::new("solve", "Решение", SOLVE_PROMPT)],
        default_template: Some(0),
        selects: vec![],
        keeps_history: true,
        clears_on_success: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_math_prompt_wraps_problem() {
        let config = config();
        let mut values = HashMap::new();
        values.insert("text".to_string(), "Решите уравнение 2x+5=15".to_string());

        let prompt = config.templates[0].render(&values).unwrap();
        assert!(prompt.starts_with("Реши следующую математическую задачу"));
        assert!(prompt.ends_with("Задача: Решите уравнение 2x+5=15"));
    }

    #[test]
    fn test_math_keeps_history() {
        assert!(config().keeps_history);
    }
}
