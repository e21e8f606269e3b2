// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Prompt templating for Shpora
//!
//! Fixed prompt texts with named placeholders, filled from user input.

pub mod template;

pub use template::*;
