// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the TUI
//!
//! Events allow the spawned generation tasks to communicate their outcome
//! back to the UI without blocking. Uses tokio mpsc channels for
//! thread-safe messaging.

use tokio::sync::mpsc;

use crate::screens::ScreenKind;

/// Events for async communication between generation tasks and the UI
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A generation call finished for a screen. The outcome carries either
    /// the generated text or the user-visible error message.
    GenerationFinished {
        screen: ScreenKind,
        outcome: std::result::Result<String, String>,
    },
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if the receiver is dropped
pub fn send_event(tx: &EventSender, event: AppEvent) {
    let _ = tx.send(event);
}
