// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History management for Shpora screens
//!
//! Session-scoped record of past generations on the screens that keep one
//! (math solver and notes creator).

pub mod store;

pub use store::{HistoryEntry, HistoryStore};
