// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use shpora::cli::{Cli, Commands, ScreenArg, SettingsCommands};
use shpora::screens::ScreenKind;

#[test]
fn test_parse_no_command() {
    let args = vec!["shpora"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_tui_command() {
    let args = vec!["shpora", "tui"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Tui(_))));
}

#[test]
fn test_parse_tui_with_screen_and_model() {
    let args = vec!["shpora", "tui", "-s", "math", "-m", "gemini-1.5-pro"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Tui(tui_args)) = cli.command {
        assert_eq!(tui_args.screen, Some(ScreenArg::Math));
        assert_eq!(tui_args.model, Some("gemini-1.5-pro".to_string()));
    } else {
        panic!("Expected Tui command");
    }
}

#[test]
fn test_parse_ask_command() {
    let args = vec!["shpora", "ask", "math", "2x+5=15"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(ask_args.screen, ScreenArg::Math);
        assert_eq!(ask_args.input, "2x+5=15");
        assert!(ask_args.template.is_none());
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_with_all_options() {
    let args = vec![
        "shpora",
        "ask",
        "essay",
        "Роль семьи",
        "-t",
        "arguments",
        "--essay-type",
        "report",
        "-m",
        "gemini-1.5-flash",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(ask_args.screen, ScreenArg::Essay);
        assert_eq!(ask_args.template, Some("arguments".to_string()));
        assert_eq!(ask_args.essay_type, Some("report".to_string()));
        assert_eq!(ask_args.model, Some("gemini-1.5-flash".to_string()));
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_language() {
    let args = vec!["shpora", "ask", "language", "привет", "-l", "fr"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(ask_args.screen, ScreenArg::Language);
        assert_eq!(ask_args.language, Some("fr".to_string()));
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_notes_with_title() {
    let args = vec!["shpora", "ask", "notes", "конспект", "--title", "Фотосинтез"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(ask_args.title, Some("Фотосинтез".to_string()));
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_missing_input_fails() {
    let args = vec!["shpora", "ask", "math"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_parse_ask_unknown_screen_fails() {
    let args = vec!["shpora", "ask", "chemistry", "H2O"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_parse_helpers_command() {
    let args = vec!["shpora", "helpers"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Helpers)));
}

#[test]
fn test_parse_settings_show() {
    let args = vec!["shpora", "settings", "show"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Settings(settings_args)) = cli.command {
        assert!(matches!(settings_args.command, Some(SettingsCommands::Show)));
    } else {
        panic!("Expected Settings command");
    }
}

#[test]
fn test_parse_settings_alias_config() {
    let args = vec!["shpora", "config", "path"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Settings(_))));
}

#[test]
fn test_parse_settings_set_model() {
    let args = vec!["shpora", "settings", "set-model", "gemini-2.0-flash"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Settings(settings_args)) = cli.command {
        if let Some(SettingsCommands::SetModel { model }) = settings_args.command {
            assert_eq!(model, "gemini-2.0-flash");
        } else {
            panic!("Expected SetModel");
        }
    } else {
        panic!("Expected Settings command");
    }
}

#[test]
fn test_parse_verbose_flag() {
    let args = vec!["shpora", "-vv", "helpers"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_screen_arg_maps_to_kind() {
    assert_eq!(ScreenArg::Cheatsheet.kind(), ScreenKind::Cheatsheet);
    assert_eq!(ScreenArg::Essay.kind(), ScreenKind::Essay);
    assert_eq!(ScreenArg::Language.kind(), ScreenKind::Language);
    assert_eq!(ScreenArg::Math.kind(), ScreenKind::Math);
    assert_eq!(ScreenArg::Notes.kind(), ScreenKind::Notes);
}
