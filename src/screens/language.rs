// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Language helper screen
//!
//! Four modes over a text and a target language. The language name appears
//! several times in some templates; substitution must cover every
//! occurrence.

use super::{ScreenConfig, ScreenKind, SelectOption, SelectSpec};
use crate::prompt::PromptTemplate;

const TRANSLATE_PROMPT: &str = r#"Переведи следующий текст с русского языка на {language} язык:

"{text}"

Пожалуйста, включи в ответ:
1. Основной перевод
2. Транскрипцию (произношение)
3. Альтернативные варианты перевода, если они есть
4. 2-3 примера использования в контексте
5. Полезные фразы или идиомы, связанные с этим выражением (если применимо)

Форматируй ответ в виде Markdown."#;

const GRAMMAR_PROMPT: &str = r#"Исправь грамматические ошибки в следующем тексте на {language} языке:

"{text}"

Пожалуйста, включи в ответ:
1. Исправленный текст
2. Список ошибок и объяснение правил грамматики, которые были нарушены
3. Краткое описание ключевых грамматических правил, которые применяются в этом тексте
4. Примеры правильного использования проблемных конструкций

Форматируй ответ в виде Markdown, используя заголовки, списки и выделение."#;

const VOCABULARY_PROMPT: &str = r#"Создай учебную карточку для слова или фразы на {language} языке: "{text}".

Пожалуйста, включи в ответ:
1. Слово или фразу на {language} языке
2. Транскрипцию и произношение
3. Все возможные переводы на русский с указанием части речи
4. Этимологию слова (происхождение)
5. Синонимы и антонимы
6. Примеры использования в предложениях (минимум 5 примеров)
7. Устойчивые выражения и идиомы с этим словом
8. Грамматические особенности использования
9. Культурные примечания (если есть)

Форматируй ответ в виде хорошо структурированной учебной карточки с использованием Markdown."#;

const PHRASEBOOK_PROMPT: &str = r#"Создай полезный разговорник с фразами на {language} языке по теме: "{text}".

Пожалуйста, включи в ответ:
1. Минимум 15 полезных фраз и выражений
2. Для каждой фразы укажи:
   - Оригинальную фразу на {language} языке
   - Транскрипцию/произношение
   - Перевод на русский язык
   - Примечания по использованию (когда и как лучше использовать фразу)
3. Раздели фразы по категориям (например, приветствие, заказ, просьбы и т.д.)
4. В конце добавь список полезных слов по этой теме

Форматируй ответ в виде хорошо структурированного Markdown."#;

pub fn config() -> ScreenConfig {
    ScreenConfig {
        kind: ScreenKind::Language,
        input_placeholder: "text",
        input_hint: "Введите текст для перевода, проверки, слово для изучения или тему для \
                     разговорника...",
        title_field: false,
        templates: vec![
            PromptTemplate::new("translate", "Перевод", TRANSLATE_PROMPT),
            PromptTemplate::new("grammar", "Грамматика", GRAMMAR_PROMPT),
            PromptTemplate::new("vocabulary", "Словарь", VOCABULARY_PROMPT),
            PromptTemplate::new("phrasebook", "Разговорник", PHRASEBOOK_PROMPT),
        ],
        default_template: Some(0),
        selects: vec![SelectSpec {
            placeholder: "language",
            label: "Language",
            options: vec![
                SelectOption { id: "en", name: "Английский" },
                SelectOption { id: "fr", name: "Французский" },
                SelectOption { id: "de", name: "Немецкий" },
                SelectOption { id: "es", name: "Испанский" },
                SelectOption { id: "it", name: "Итальянский" },
                SelectOption { id: "zh", name: "Китайский" },
                SelectOption { id: "ja", name: "Японский" },
            ],
        }],
        keeps_history: false,
        clears_on_success: false,
    }
}
