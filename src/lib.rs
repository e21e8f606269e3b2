// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shpora - AI study assistant for your terminal.
//!
//! Five helpers (cheatsheet generator, essay helper, language helper, math
//! solver, notes creator) that each build a prompt from a fixed template,
//! make a single text-generation call, and render the returned markdown.
//!
//! Architecture highlights:
//! - `prompt`: fixed templates with named placeholders and substitution
//! - `llm`: generation provider abstraction and the Gemini implementation
//! - `screens`: per-screen configuration driving one shared request
//!   controller (idle -> loading -> success | failed)
//! - `history`: session-scoped newest-first record on the screens that
//!   keep one
//! - `tui`: ratatui presentation layer rendering results as markdown

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod prompt;
pub mod screens;
pub mod tui;

pub use error::{Result, ShporaError};
