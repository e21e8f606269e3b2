// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the TUI
//!
//! Handles layout and rendering of all screens using ratatui.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::screens::RequestPhase;
use crate::tui::app::{App, Focus};
use crate::tui::markdown::render_markdown;

/// Draw the whole UI
pub fn draw(frame: &mut Frame, app: &App) {
    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, app, tabs_area);

    let [form_area, output_area] =
        Layout::horizontal([Constraint::Percentage(42), Constraint::Percentage(58)])
            .areas(body_area);

    draw_form(frame, app, form_area);
    draw_output(frame, app, output_area);
    draw_status(frame, app, status_area);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .controllers
        .iter()
        .map(|c| Line::from(format!(" {} ", c.config().kind.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).bold());

    frame.render_widget(tabs, area);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.controller().config();

    let mut constraints: Vec<Constraint> = Vec::new();
    if config.templates.len() > 1 {
        constraints.push(Constraint::Length(config.templates.len() as u16 + 2));
    }
    for _ in &config.selects {
        constraints.push(Constraint::Length(3));
    }
    if config.title_field {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));

    let chunks = Layout::vertical(constraints).split(area);
    let mut chunk_idx = 0;

    if config.templates.len() > 1 {
        draw_template_list(frame, app, chunks[chunk_idx]);
        chunk_idx += 1;
    }

    for (select_idx, _) in config.selects.iter().enumerate() {
        draw_select(frame, app, select_idx, chunks[chunk_idx]);
        chunk_idx += 1;
    }

    if config.title_field {
        draw_text_field(frame, app, chunks[chunk_idx], Focus::Title);
        chunk_idx += 1;
    }

    draw_text_field(frame, app, chunks[chunk_idx], Focus::Input);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_template_list(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();
    let config = controller.config();
    let selected = controller.form.selected_template;

    let items: Vec<ListItem> = config
        .templates
        .iter()
        .enumerate()
        .map(|(i, template)| {
            let marker = if Some(i) == selected { "● " } else { "○ " };
            let style = if Some(i) == selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(template.name.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Template ")
            .border_style(border_style(app.focus == Focus::Templates)),
    );

    frame.render_widget(list, area);
}

fn draw_select(frame: &mut Frame, app: &App, select_idx: usize, area: Rect) {
    let controller = app.controller();
    let spec = &controller.config().selects[select_idx];
    let selected = controller.form.selections[select_idx];
    let option = &spec.options[selected];

    let content = Line::from(vec![
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(option.name, Style::default().fg(Color::White)),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", spec.label))
            .border_style(border_style(app.focus == Focus::Select(select_idx))),
    );

    frame.render_widget(paragraph, area);
}

fn draw_text_field(frame: &mut Frame, app: &App, area: Rect, which: Focus) {
    let (input, title) = match which {
        Focus::Title => (&app.titles[app.active], " Title "),
        _ => (&app.inputs[app.active], " Input "),
    };
    let focused = app.focus == which;
    let config = app.controller().config();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style(focused));
    let inner = block.inner(area);

    if input.is_empty() && which == Focus::Input {
        let hint = Paragraph::new(config.input_hint)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
    } else {
        let paragraph = Paragraph::new(input.text())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    if focused && inner.width > 0 {
        let width = inner.width as usize;
        let cursor = input.cursor_chars();
        let x = inner.x + (cursor % width) as u16;
        let y = inner.y + (cursor / width) as u16;
        if y < inner.y + inner.height {
            frame.set_cursor_position((x, y));
        }
    }
}

fn draw_output(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();

    if controller.config().keeps_history {
        let [result_area, history_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(9)]).areas(area);
        draw_result(frame, app, result_area);
        draw_history(frame, app, history_area);
    } else {
        draw_result(frame, app, area);
    }
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match controller.phase() {
        RequestPhase::Loading => Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", app.spinner()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("Generating...", Style::default().fg(Color::Yellow)),
        ]))
        .block(block),
        RequestPhase::Failed => {
            let message = controller.error().unwrap_or("Request failed");
            Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .block(block)
        }
        RequestPhase::Success => {
            let text = render_markdown(controller.result().unwrap_or_default());
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .scroll((app.result_scroll[app.active], 0))
                .block(block)
        }
        RequestPhase::Idle => Paragraph::new("The result will appear here.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block),
    };

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();
    let focused = app.focus == Focus::History;
    let Some(history) = controller.history() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" History (Enter load · x delete · c clear) ")
        .border_style(border_style(focused));

    if history.is_empty() {
        let empty = Paragraph::new("History is empty.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let preview_width = area.width.saturating_sub(14) as usize;
    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = focused && i == app.history_selected[app.active];
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let timestamp = entry.created_at.format("%H:%M:%S");
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", timestamp), style.fg(Color::DarkGray)),
                Span::styled(entry.input_preview(preview_width), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.controller();
    let submit_hint = if controller.can_submit() {
        Span::styled("Enter submit", Style::default().fg(Color::Green))
    } else if controller.is_loading() {
        Span::styled("generating...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("fill in the form", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(
            " Tab screen · ↑↓ focus · ←→ change · ",
            Style::default().fg(Color::DarkGray),
        ),
        submit_hint,
        Span::styled(
            " · Ctrl+C quit ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("· {} ", app.model),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
