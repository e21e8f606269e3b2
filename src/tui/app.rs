// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and key handling for the TUI
//!
//! Holds one controller per screen plus the per-screen editing state, and
//! dispatches generation calls onto the tokio runtime. Completions come
//! back through the event channel and are applied on the UI thread.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::llm::{GenerationProvider, GenerationRequest};
use crate::screens::{ScreenController, ScreenKind};
use crate::tui::events::{create_event_channel, send_event, AppEvent, EventReceiver, EventSender};
use crate::tui::input::InputState;

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Which element has keyboard focus on the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Template picker (screens with more than one template)
    Templates,
    /// A select control, by index into the screen's selects
    Select(usize),
    /// Title field (notes)
    Title,
    /// Main input field
    Input,
    /// History list (math, notes)
    History,
}

/// TUI application state
pub struct App {
    /// One controller per screen, parallel to ScreenKind::ALL
    pub controllers: Vec<ScreenController>,
    /// Index of the active screen
    pub active: usize,
    /// Focused element on the active screen
    pub focus: Focus,
    /// Main input editing state per screen
    pub inputs: Vec<InputState>,
    /// Title editing state per screen (used by notes)
    pub titles: Vec<InputState>,
    /// Selected history row per screen
    pub history_selected: Vec<usize>,
    /// Result pane scroll offset per screen
    pub result_scroll: Vec<u16>,
    /// Current spinner frame
    pub spinner_frame: usize,
    /// Model used for every request
    pub model: String,
    /// Set when the user quits
    pub should_quit: bool,

    temperature: f32,
    max_output_tokens: u32,
    provider: Arc<dyn GenerationProvider>,
    tx: EventSender,
    rx: EventReceiver,
}

impl App {
    /// Create the application state with one controller per screen
    pub fn new(provider: Arc<dyn GenerationProvider>, settings: &Settings, model: String) -> Self {
        let controllers: Vec<ScreenController> = ScreenKind::ALL
            .iter()
            .map(|kind| ScreenController::new(kind.config()))
            .collect();
        let count = controllers.len();
        let (tx, rx) = create_event_channel();

        Self {
            controllers,
            active: 0,
            focus: Focus::Input,
            inputs: vec![InputState::new(); count],
            titles: vec![InputState::new(); count],
            history_selected: vec![0; count],
            result_scroll: vec![0; count],
            spinner_frame: 0,
            model,
            should_quit: false,
            temperature: settings.defaults.temperature,
            max_output_tokens: settings.defaults.max_output_tokens,
            provider,
            tx,
            rx,
        }
    }

    /// Switch to a screen by kind
    pub fn activate(&mut self, kind: ScreenKind) {
        if let Some(idx) = ScreenKind::ALL.iter().position(|k| *k == kind) {
            self.active = idx;
            self.focus = Focus::Input;
        }
    }

    /// The active screen's controller
    pub fn controller(&self) -> &ScreenController {
        &self.controllers[self.active]
    }

    /// The active screen's controller, mutable
    pub fn controller_mut(&mut self) -> &mut ScreenController {
        &mut self.controllers[self.active]
    }

    /// Whether any screen has a request in flight
    pub fn any_loading(&self) -> bool {
        self.controllers.iter().any(|c| c.is_loading())
    }

    /// Advance animation state
    pub fn tick(&mut self) {
        if self.any_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Current spinner character
    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Copy the editing buffers of the active screen into its form
    fn sync_form(&mut self) {
        let input = self.inputs[self.active].text().to_string();
        let title = self.titles[self.active].text().to_string();
        let form = &mut self.controllers[self.active].form;
        form.input = input;
        form.title = title;
    }

    /// Focusable elements of the active screen, in navigation order
    pub fn focus_order(&self) -> Vec<Focus> {
        let config = self.controller().config();
        let mut order = Vec::new();
        if config.templates.len() > 1 {
            order.push(Focus::Templates);
        }
        for i in 0..config.selects.len() {
            order.push(Focus::Select(i));
        }
        if config.title_field {
            order.push(Focus::Title);
        }
        order.push(Focus::Input);
        if config.keeps_history {
            order.push(Focus::History);
        }
        order
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let current = order
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(order.len() - 1);
        let next = (current as isize + delta).rem_euclid(order.len() as isize) as usize;
        self.focus = order[next];
    }

    fn switch_screen(&mut self, delta: isize) {
        let len = self.controllers.len() as isize;
        self.active = ((self.active as isize + delta).rem_euclid(len)) as usize;
        self.focus = Focus::Input;
    }

    /// Submit the active screen's form if the controller accepts it
    pub fn submit(&mut self) {
        self.sync_form();

        let prompt = match self.controllers[self.active].begin() {
            Ok(prompt) => prompt,
            // Guard rejected the submit (empty input, in flight, bad template)
            Err(_) => return,
        };

        let kind = self.controller().config().kind;
        let request = GenerationRequest::new(self.model.clone(), prompt)
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens);
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = provider
                .generate(request)
                .await
                .map(|response| response.text)
                .map_err(|e| e.to_string());
            send_event(&tx, AppEvent::GenerationFinished { screen: kind, outcome });
        });
    }

    /// Apply all pending generation events
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Await and apply the next generation event (used by tests)
    pub async fn process_next_event(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::GenerationFinished { screen, outcome } => {
                let Some(idx) = ScreenKind::ALL.iter().position(|k| *k == screen) else {
                    return;
                };
                self.controllers[idx].finish(outcome);
                self.result_scroll[idx] = 0;
                self.history_selected[idx] = 0;
                if self.controllers[idx].config().clears_on_success
                    && self.controllers[idx].result().is_some()
                {
                    self.inputs[idx].clear();
                    self.titles[idx].clear();
                }
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global bindings first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('u') => {
                    if self.focus == Focus::Input {
                        self.inputs[self.active].clear();
                        self.sync_form();
                    } else if self.focus == Focus::Title {
                        self.titles[self.active].clear();
                        self.sync_form();
                    }
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => self.switch_screen(1),
            KeyCode::BackTab => self.switch_screen(-1),
            KeyCode::Esc => self.focus = Focus::Input,
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Up => self.handle_up(),
            KeyCode::Down => self.handle_down(),
            KeyCode::Left => self.handle_left(),
            KeyCode::Right => self.handle_right(),
            KeyCode::PageUp => {
                self.result_scroll[self.active] = self.result_scroll[self.active].saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.result_scroll[self.active] = self.result_scroll[self.active].saturating_add(5);
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.backspace();
                    self.sync_form();
                }
            }
            KeyCode::Delete => match self.focus {
                Focus::History => self.remove_selected_history_entry(),
                _ => {
                    if let Some(field) = self.focused_field() {
                        field.delete();
                        self.sync_form();
                    }
                }
            },
            KeyCode::Home => {
                if let Some(field) = self.focused_field() {
                    field.move_home();
                }
            }
            KeyCode::End => {
                if let Some(field) = self.focused_field() {
                    field.move_end();
                }
            }
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }
    }

    fn focused_field(&mut self) -> Option<&mut InputState> {
        match self.focus {
            Focus::Input => Some(&mut self.inputs[self.active]),
            Focus::Title => Some(&mut self.titles[self.active]),
            _ => None,
        }
    }

    fn handle_char(&mut self, c: char) {
        match self.focus {
            Focus::Input | Focus::Title => {
                if let Some(field) = self.focused_field() {
                    field.insert_char(c);
                    self.sync_form();
                }
            }
            Focus::History => match c {
                'x' => self.remove_selected_history_entry(),
                'c' => {
                    self.controller_mut().clear_history();
                    self.history_selected[self.active] = 0;
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_enter(&mut self) {
        match self.focus {
            Focus::History => {
                if let Some(id) = self.selected_history_id() {
                    let idx = self.active;
                    if self.controllers[idx].load_history_entry(id) {
                        let form = self.controllers[idx].form.clone();
                        self.inputs[idx].set_text(form.input);
                        self.titles[idx].set_text(form.title);
                        self.result_scroll[idx] = 0;
                    }
                }
            }
            _ => self.submit(),
        }
    }

    fn handle_up(&mut self) {
        if self.focus == Focus::History {
            let selected = &mut self.history_selected[self.active];
            if *selected == 0 {
                self.focus = Focus::Input;
            } else {
                *selected -= 1;
            }
        } else {
            self.move_focus(-1);
        }
    }

    fn handle_down(&mut self) {
        if self.focus == Focus::History {
            let len = self.controller().history().map(|h| h.len()).unwrap_or(0);
            let selected = &mut self.history_selected[self.active];
            if len > 0 && *selected + 1 < len {
                *selected += 1;
            }
        } else {
            self.move_focus(1);
        }
    }

    fn handle_left(&mut self) {
        match self.focus {
            Focus::Templates => self.controller_mut().cycle_template(-1),
            Focus::Select(i) => self.controller_mut().cycle_option(i, -1),
            Focus::Input | Focus::Title => {
                if let Some(field) = self.focused_field() {
                    field.move_left();
                }
            }
            Focus::History => {}
        }
    }

    fn handle_right(&mut self) {
        match self.focus {
            Focus::Templates => self.controller_mut().cycle_template(1),
            Focus::Select(i) => self.controller_mut().cycle_option(i, 1),
            Focus::Input | Focus::Title => {
                if let Some(field) = self.focused_field() {
                    field.move_right();
                }
            }
            Focus::History => {}
        }
    }

    fn selected_history_id(&self) -> Option<uuid::Uuid> {
        let history = self.controller().history()?;
        history
            .entries()
            .get(self.history_selected[self.active])
            .map(|e| e.id)
    }

    fn remove_selected_history_entry(&mut self) {
        if let Some(id) = self.selected_history_id() {
            self.controller_mut().remove_history_entry(id);
            let len = self.controller().history().map(|h| h.len()).unwrap_or(0);
            let selected = &mut self.history_selected[self.active];
            if *selected >= len && len > 0 {
                *selected = len - 1;
            } else if len == 0 {
                *selected = 0;
            }
        }
    }
}
