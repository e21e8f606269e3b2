// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shpora - AI study assistant for your terminal
//!
//! Entry point for the Shpora CLI application.

use clap::Parser;

use shpora::cli::{AskArgs, Cli, Commands, SettingsArgs, SettingsCommands, TuiArgs};
use shpora::config::Settings;
use shpora::error::{Result, ShporaError};
use shpora::llm::factory::ProviderFactory;
use shpora::llm::GenerationRequest;
use shpora::screens::{ScreenController, ScreenKind};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables request diagnostics without
    // requiring users to know target names. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "shpora=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings
    let settings = Settings::load()?;

    // Ensure directories exist
    Settings::ensure_directories()?;

    // Dispatch to appropriate command
    match cli.command {
        None => {
            run_tui(TuiArgs::default(), settings).await?;
        }
        Some(Commands::Tui(args)) => {
            run_tui(args, settings).await?;
        }
        Some(Commands::Ask(args)) => {
            run_ask(args, settings).await?;
        }
        Some(Commands::Helpers) => {
            run_helpers();
        }
        Some(Commands::Settings(args)) => {
            run_settings(args, settings)?;
        }
    }

    Ok(())
}

/// Open the interactive TUI
async fn run_tui(args: TuiArgs, settings: Settings) -> Result<()> {
    let provider = ProviderFactory::create(&settings)?;
    let model = args
        .model
        .unwrap_or_else(|| ProviderFactory::default_model(&settings));
    let initial_screen = args.screen.map(|s| s.kind());

    shpora::tui::run_tui(provider, &settings, model, initial_screen).await
}

/// Run one helper without the TUI and print the markdown result
async fn run_ask(args: AskArgs, settings: Settings) -> Result<()> {
    let provider = ProviderFactory::create(&settings)?;
    let model = args
        .model
        .unwrap_or_else(|| ProviderFactory::default_model(&settings));

    let kind = args.screen.kind();
    let mut controller = ScreenController::new(kind.config());
    controller.form.input = args.input;
    if let Some(title) = args.title {
        controller.form.title = title;
    }

    apply_template_choice(&mut controller, args.template.as_deref())?;
    apply_select_choice(&mut controller, "language", args.language.as_deref())?;
    apply_select_choice(&mut controller, "essay_type", args.essay_type.as_deref())?;

    if kind == ScreenKind::Notes && controller.form.title.trim().is_empty() {
        return Err(ShporaError::InvalidInput(
            "the notes helper needs a --title".to_string(),
        ));
    }

    let prompt = controller.begin()?;
    let request = GenerationRequest::new(model, prompt)
        .with_temperature(settings.defaults.temperature)
        .with_max_output_tokens(settings.defaults.max_output_tokens);

    let outcome = provider
        .generate(request)
        .await
        .map(|response| response.text)
        .map_err(|e| e.to_string());
    controller.finish(outcome);

    match controller.result() {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => {
            // The failure message is the displayed output; the exit code
            // still reports the failure
            eprintln!("{}", controller.error().unwrap_or("generation failed"));
            std::process::exit(1);
        }
    }
}

/// Resolve an explicit template choice, or report the available IDs when
/// the screen needs one and none was given
fn apply_template_choice(controller: &mut ScreenController, template: Option<&str>) -> Result<()> {
    let config = controller.config();

    match template {
        Some(id) => {
            let idx = config.template_index(id).ok_or_else(|| {
                ShporaError::InvalidInput(format!(
                    "unknown template '{}' (available: {})",
                    id,
                    template_ids(controller)
                ))
            })?;
            controller.form.selected_template = Some(idx);
        }
        None => {
            if config.default_template.is_none() {
                return Err(ShporaError::InvalidInput(format!(
                    "this helper needs --template (available: {})",
                    template_ids(controller)
                )));
            }
        }
    }

    Ok(())
}

fn template_ids(controller: &ScreenController) -> String {
    controller
        .config()
        .templates
        .iter()
        .map(|t| t.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a select option given on the command line by its ID
fn apply_select_choice(
    controller: &mut ScreenController,
    placeholder: &str,
    choice: Option<&str>,
) -> Result<()> {
    let Some(id) = choice else {
        return Ok(());
    };

    let config = controller.config();
    let Some(select_idx) = config
        .selects
        .iter()
        .position(|s| s.placeholder == placeholder)
    else {
        return Err(ShporaError::InvalidInput(format!(
            "this helper has no {} option",
            placeholder
        )));
    };

    let spec = &config.selects[select_idx];
    let option_idx = spec.option_index(id).ok_or_else(|| {
        ShporaError::InvalidInput(format!(
            "unknown {} '{}' (available: {})",
            placeholder,
            id,
            spec.options
                .iter()
                .map(|o| o.id)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    controller.form.selections[select_idx] = option_idx;
    Ok(())
}

/// Print the helpers with their templates and options
fn run_helpers() {
    for kind in ScreenKind::ALL {
        let config = kind.config();
        println!("{} - {}", kind.id(), kind.title());

        if config.templates.len() > 1 {
            println!("  templates:");
            for template in &config.templates {
                println!("    {} - {}", template.id, template.name);
            }
        }
        for select in &config.selects {
            println!("  {} options:", select.placeholder);
            for option in &select.options {
                println!("    {} - {}", option.id, option.name);
            }
        }
        if config.keeps_history {
            println!("  keeps a session history");
        }
    }
}

/// Handle the settings subcommand
fn run_settings(args: SettingsArgs, mut settings: Settings) -> Result<()> {
    match args.command {
        None | Some(SettingsCommands::Show) => {
            let mut display = settings.clone();
            if display.providers.gemini.api_key.is_some() {
                display.providers.gemini.api_key = Some("********".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&display)?);
        }
        Some(SettingsCommands::Path) => {
            println!("{}", Settings::default_path().display());
        }
        Some(SettingsCommands::SetModel { model }) => {
            settings.providers.gemini.default_model = model.clone();
            settings.save()?;
            println!("default model set to {}", model);
        }
    }

    Ok(())
}
