mod action;
mod app;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod responses;
mod session;
mod tui;
mod types;
mod views;

use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

use app::App;
use cli::{Cli, Commands};
use client::{AtlasClient, ClientOptions};
use config::Config;
use error::{AtlasError, Result};
use session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't talk to Atlas
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "atlas-projects", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Init) => return commands::init::run(),
        _ => {}
    }

    init_logging(&cli)?;

    let config = Config::load()?;
    let credentials = config.credentials();
    let mut client = AtlasClient::with_options(
        credentials.public_key.clone(),
        credentials.private_key.clone(),
        ClientOptions::from(&config),
    )?;

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => {
            tracing::info!("Starting atlas-projects");
            let mut app = App::new(Session::new(&credentials), client);
            app.run().await?;
            tracing::info!("Goodbye!");
        }
        command => {
            if !credentials.is_complete() {
                return Err(AtlasError::MissingCredentials(credentials.missing()));
            }

            let result = match command {
                Commands::Projects => commands::projects::list(&client).await,
                Commands::Clusters { project_id } => {
                    commands::clusters::list(&client, &project_id).await
                }
                Commands::Delete { project_id, yes } => {
                    commands::delete::run(&client, &project_id, yes).await
                }
                Commands::Ui | Commands::Completions { .. } | Commands::Init => Ok(()),
            };
            client.close();
            result?;
        }
    }

    Ok(())
}

/// Log to a file; stdout belongs to the terminal UI.
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let log_file = File::create(&cli.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| AtlasError::Logging(e.to_string()))
}
