// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Shpora.

use clap::{Parser, Subcommand, ValueEnum};

use crate::screens::ScreenKind;

/// Shpora - AI study assistant for your terminal
#[derive(Parser, Debug)]
#[command(name = "shpora")]
#[command(version, about = "AI study assistant for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive TUI (default when no command given)
    Tui(TuiArgs),

    /// Run one helper without the TUI and print the result
    Ask(AskArgs),

    /// List the helpers, their templates and options
    Helpers,

    /// Manage configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the tui subcommand
#[derive(clap::Args, Debug, Default)]
pub struct TuiArgs {
    /// Screen to open first
    #[arg(short, long)]
    pub screen: Option<ScreenArg>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// Helper screen to run
    pub screen: ScreenArg,

    /// Input text (request, topic, text, problem or note content)
    pub input: String,

    /// Template ID, for screens with several templates
    #[arg(short, long)]
    pub template: Option<String>,

    /// Target language code for the language helper (en, fr, de, es, it, zh, ja)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Essay type ID for the essay helper
    #[arg(long)]
    pub essay_type: Option<String>,

    /// Note title for the notes helper
    #[arg(long)]
    pub title: Option<String>,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Print the settings file path
    Path,

    /// Set the default model
    SetModel {
        /// Model identifier (e.g. gemini-1.5-flash)
        model: String,
    },
}

/// Screen selector used on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Cheatsheet,
    Essay,
    Language,
    Math,
    Notes,
}

impl ScreenArg {
    /// The corresponding screen kind
    pub fn kind(&self) -> ScreenKind {
        match self {
            ScreenArg::Cheatsheet => ScreenKind::Cheatsheet,
            ScreenArg::Essay => ScreenKind::Essay,
            ScreenArg::Language => ScreenKind::Language,
            ScreenArg::Math => ScreenKind::Math,
            ScreenArg::Notes => ScreenKind::Notes,
        }
    }
}
