// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Essay helper screen
//!
//! Five templates over a topic and an essay type. No template is selected
//! initially; submit stays unavailable until the user picks one.

use super::{ScreenConfig, ScreenKind, SelectOption, SelectSpec};
use crate::prompt::PromptTemplate;

pub fn config() -> ScreenConfig {
    ScreenConfig {
        kind: ScreenKind::Essay,
        input_placeholder: "topic",
        input_hint: "Введите тему сочинения или эссе (например, 'Роль семьи в жизни человека', \
                     'Проблема выбора в современном обществе')...",
        title_field: false,
        templates: vec![
            PromptTemplate::new(
                "plan",
                "План сочинения",
                "Составь подробный план сочинения на тему \"{topic}\". План должен включать \
                 введение, основную часть с 3-4 пунктами и заключение. Для каждого пункта \
                 предложи ключевые мысли и аргументы.",
            ),
            PromptTemplate::new(
                "arguments",
                "Примеры аргументов",
                "Предложи 5-7 сильных аргументов, которые можно использовать в {essay_type} \
                 на тему \"{topic}\". Для каждого аргумента приведи краткое объяснение и \
                 возможный пример.",
            ),
            PromptTemplate::new(
                "intro-conclusion",
                "Вступление и заключение",
                "Напиши вступление и заключение для {essay_type} на тему \"{topic}\". \
                 Вступление должно привлекать внимание и обозначать проблему, а заключение - \
                 подводить итоги и содержать вывод.",
            ),
            PromptTemplate::new(
                "quotes",
                "Литературные цитаты",
                "Подбери 5-7 подходящих цитат из литературных произведений, которые можно \
                 использовать в {essay_type} на тему \"{topic}\". Для каждой цитаты укажи \
                 автора, произведение и контекст.",
            ),
            PromptTemplate::new(
                "full",
                "Полное сочинение",
                "Напиши полное {essay_type} на тему \"{topic}\" для ученика старшей школы. \
                 Сочинение должно быть структурированным, содержать введение, основную часть \
                 с аргументами и заключение.",
            ),
        ],
        default_template: None,
        selects: vec![SelectSpec {
            placeholder: "essay_type",
            label: "Type",
            options: vec![
                SelectOption { id: "composition", name: "сочинение" },
                SelectOption { id: "essay", name: "эссе" },
                SelectOption { id: "summary", name: "изложение" },
                SelectOption { id: "report", name: "доклад" },
                SelectOption { id: "reasoning", name: "рассуждение" },
            ],
        }],
        keeps_history: false,
        clears_on_success: false,
    }
}
