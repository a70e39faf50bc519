//! studybuddy - AI Study Buddy command-line client.
//!
//! ```bash
//! studybuddy login mario.rossi@example.com --password secret
//! studybuddy page /quiz.html --title Quiz
//! studybuddy stats
//! ```

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use studybuddy_client::layout::LayoutOptions;
use studybuddy_client::stats::format_number;
use studybuddy_client::{
    logging, AppState, CancellationToken, Config, Error, HistoryNavigator, LayoutVariant, Result,
};
use studybuddy_common::RegisterRequest;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging.level);

    let navigator = Arc::new(HistoryNavigator::new());
    let state = match AppState::from_config(config, navigator.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to open storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &state, &navigator).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(target) = navigator.last() {
                eprintln!("Redirected to {}", target);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, state: &AppState, navigator: &HistoryNavigator) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            if let Some(message) = state.session.take_message() {
                println!("{}", message);
            }
            let login = state.api.login(&email, &password).await?;
            println!("Benvenuto, {}!", login.user().display_name());
        }

        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            education_level,
        } => {
            let request = RegisterRequest {
                first_name,
                last_name,
                email,
                password,
                education_level,
            };
            let response = state.api.register(&request).await?;
            if !response.success {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registrazione non riuscita".to_string());
                return Err(Error::Status {
                    status: 200,
                    message,
                });
            }
            println!("Registrazione completata. Ora puoi effettuare il login.");
        }

        Commands::Logout => {
            studybuddy_client::auth::logout(&state.session, navigator);
            println!("Logout effettuato.");
        }

        Commands::Page {
            path,
            title,
            active,
            no_footer,
            variant,
        } => {
            let mut options = LayoutOptions::new(&title);
            options.active_page = active;
            options.show_footer = state.config.layout.show_footer && !no_footer;

            let variant_state;
            let state = match variant {
                Some(variant) if variant != state.composer.variant() => {
                    variant_state = with_variant(state, variant)?;
                    &variant_state
                }
                _ => state,
            };

            let mut page = state.open_page(&path, &options);
            if !page.is_rendered() {
                if let Some(message) = state.session.take_message() {
                    eprintln!("{}", message);
                }
                return Err(Error::Unauthenticated);
            }
            page.wait_for_stats().await;
            println!("{}", page.render().await);
        }

        Commands::Stats => {
            if !state.session.is_logged_in() {
                return Err(Error::Unauthenticated);
            }
            match state.stats.fetch(&CancellationToken::new()).await? {
                Some(stats) => {
                    println!("Streak:  {}", stats.streak());
                    println!("XP:      {}", format_number(stats.xp()));
                    println!("Livello: {}", stats.level());
                }
                None => println!("Statistiche non disponibili."),
            }
        }

        Commands::Verify => {
            if state.api.verify().await? {
                println!("Token valido.");
            } else {
                println!("Token non valido.");
            }
        }
    }

    Ok(())
}

/// Same state, composing pages with another layout variant.
fn with_variant(state: &AppState, variant: LayoutVariant) -> Result<AppState> {
    let mut config = state.config.clone();
    config.layout.variant = variant;
    AppState::new(config, state.session.clone(), state.navigator.clone())
}
