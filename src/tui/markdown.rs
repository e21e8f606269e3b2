// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Markdown rendering for the result pane
//!
//! Converts generated markdown into styled ratatui text. Supports the
//! structures the model actually produces: headings, paragraphs, ordered
//! and unordered lists, emphasis, inline code and code blocks.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Render markdown source into styled lines
pub fn render_markdown(source: &str) -> Text<'static> {
    let parser = Parser::new_ext(source, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![Style::default()];
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut in_code_block = false;

    let flush =
        |spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
            if !spans.is_empty() {
                lines.push(Line::from(std::mem::take(spans)));
            }
        };

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    flush(&mut spans, &mut lines);
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    style_stack.push(heading_style(level));
                }
                Tag::Paragraph => {
                    // Inside a list item the text stays on the marker's line
                    if list_stack.is_empty() {
                        flush(&mut spans, &mut lines);
                        if !lines.is_empty() {
                            lines.push(Line::default());
                        }
                    }
                }
                Tag::List(start) => {
                    flush(&mut spans, &mut lines);
                    if !lines.is_empty() && list_stack.is_empty() {
                        lines.push(Line::default());
                    }
                    list_stack.push(start);
                }
                Tag::Item => {
                    flush(&mut spans, &mut lines);
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    let marker = match list_stack.last_mut() {
                        Some(Some(number)) => {
                            let marker = format!("{}{}. ", indent, number);
                            *number += 1;
                            marker
                        }
                        _ => format!("{}• ", indent),
                    };
                    spans.push(Span::styled(marker, Style::default().fg(Color::DarkGray)));
                }
                Tag::Emphasis => {
                    let style = current(&style_stack).add_modifier(Modifier::ITALIC);
                    style_stack.push(style);
                }
                Tag::Strong => {
                    let style = current(&style_stack).add_modifier(Modifier::BOLD);
                    style_stack.push(style);
                }
                Tag::CodeBlock(_) => {
                    flush(&mut spans, &mut lines);
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    in_code_block = true;
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    flush(&mut spans, &mut lines);
                    style_stack.pop();
                }
                TagEnd::Emphasis | TagEnd::Strong => {
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => {
                    flush(&mut spans, &mut lines);
                }
                TagEnd::List(_) => {
                    flush(&mut spans, &mut lines);
                    list_stack.pop();
                }
                TagEnd::CodeBlock => {
                    flush(&mut spans, &mut lines);
                    in_code_block = false;
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    // Code block text arrives with embedded newlines
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("  {}", code_line),
                            Style::default().fg(Color::Green),
                        )));
                    }
                } else {
                    spans.push(Span::styled(text.to_string(), current(&style_stack)));
                }
            }
            Event::Code(code) => {
                spans.push(Span::styled(
                    code.to_string(),
                    current(&style_stack).fg(Color::Green),
                ));
            }
            Event::SoftBreak => {
                spans.push(Span::styled(" ".to_string(), current(&style_stack)));
            }
            Event::HardBreak => {
                flush(&mut spans, &mut lines);
            }
            Event::Rule => {
                flush(&mut spans, &mut lines);
                lines.push(Line::from(Span::styled(
                    "────────".to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {}
        }
    }

    flush(&mut spans, &mut lines);
    Text::from(lines)
}

fn current(stack: &[Style]) -> Style {
    stack.last().copied().unwrap_or_default()
}

fn heading_style(level: HeadingLevel) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => base.fg(Color::Cyan),
        HeadingLevel::H2 => base.fg(Color::Blue),
        _ => base.fg(Color::White),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_strings(source: &str) -> Vec<String> {
        render_markdown(source)
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = rendered_strings("Just some text.");
        assert_eq!(lines, vec!["Just some text."]);
    }

    #[test]
    fn test_heading_rendered_bold() {
        let text = render_markdown("# Solution");
        let first = &text.lines[0];
        assert_eq!(first.spans[0].content, "Solution");
        assert!(first.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unordered_list_markers() {
        let lines = rendered_strings("- one\n- two");
        assert!(lines.iter().any(|l| l.contains("• one")));
        assert!(lines.iter().any(|l| l.contains("• two")));
    }

    #[test]
    fn test_ordered_list_numbering() {
        let lines = rendered_strings("1. first\n2. second\n3. third");
        assert!(lines.iter().any(|l| l.starts_with("1. ")));
        assert!(lines.iter().any(|l| l.starts_with("2. ")));
        assert!(lines.iter().any(|l| l.starts_with("3. ")));
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let lines = rendered_strings("first\n\nsecond");
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_code_block_lines() {
        let lines = rendered_strings("```\nlet x = 5;\nlet y = 6;\n```");
        assert!(lines.iter().any(|l| l.contains("let x = 5;")));
        assert!(lines.iter().any(|l| l.contains("let y = 6;")));
    }

    #[test]
    fn test_inline_code_kept_in_line() {
        let lines = rendered_strings("use `useState` here");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("useState"));
    }

    #[test]
    fn test_bold_span_styled() {
        let text = render_markdown("an **important** word");
        let spans = &text.lines[0].spans;
        let bold = spans
            .iter()
            .find(|s| s.content.as_ref() == "important")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cyrillic_content() {
        let lines = rendered_strings("# Решение\n\nx = 5 — ответ задачи.");
        assert!(lines.iter().any(|l| l.contains("Решение")));
        assert!(lines.iter().any(|l| l.contains("ответ задачи")));
    }

    #[test]
    fn test_empty_input() {
        let text = render_markdown("");
        assert!(text.lines.is_empty());
    }

    #[test]
    fn test_soft_break_joins_with_space() {
        let lines = rendered_strings("one\ntwo");
        assert_eq!(lines, vec!["one two"]);
    }
}
