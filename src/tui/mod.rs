// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal UI for Shpora
//!
//! Five tabs, one per screen, each with a form pane on the left and the
//! rendered result (plus history where the screen keeps one) on the right.
//! Uses ratatui for rendering and crossterm for input handling.

pub mod app;
pub mod events;
pub mod input;
pub mod markdown;
pub mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::Event as TermEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::{Result, ShporaError};
use crate::llm::GenerationProvider;
use crate::screens::ScreenKind;
use app::App;

/// Run the interactive TUI until the user quits
pub async fn run_tui(
    provider: Arc<dyn GenerationProvider>,
    settings: &Settings,
    model: String,
    initial_screen: Option<ScreenKind>,
) -> Result<()> {
    // Setup terminal with a panic hook so a crash never leaves the
    // terminal in raw mode
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| ShporaError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| ShporaError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| ShporaError::Tui(e.to_string()))?;

    let mut app = App::new(provider, settings, model);
    if let Some(screen) = initial_screen {
        app.activate(screen);
    }

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().map_err(|e| ShporaError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| ShporaError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| ShporaError::Tui(e.to_string()))?;

    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        app.drain_events();

        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| ShporaError::Tui(e.to_string()))?;

        // Poll for terminal events with a timeout so spinner ticks and
        // finished generations keep rendering
        let has_event = crossterm::event::poll(Duration::from_millis(50))
            .map_err(|e| ShporaError::Tui(e.to_string()))?;

        if has_event {
            let event = crossterm::event::read().map_err(|e| ShporaError::Tui(e.to_string()))?;
            if let TermEvent::Key(key) = event {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
