// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Generation client module for Shpora
//!
//! Provides abstraction over the external text-generation service.

pub mod factory;
pub mod mock_provider;
pub mod provider;
pub mod providers;

pub use provider::*;
