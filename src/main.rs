//! smokenotes - Turn BBQ video transcripts into Markdown recipe cards
//!
//! Entry point for the smokenotes CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smokenotes::cli::commands::{self, ExtractOptions};
use smokenotes::cli::{Cli, Commands};
use smokenotes::config::Settings;

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            smokenotes::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            init_logging(cli.verbose, &settings.general.log_level);

            let config_path = Settings::config_path()?;
            if !config_path.exists() {
                tracing::debug!(
                    "No config file found at {}, using defaults",
                    config_path.display()
                );
            }

            match command {
                Commands::Extract {
                    url,
                    transcript_file,
                    title,
                    json,
                    no_save,
                } => {
                    let options = ExtractOptions {
                        url,
                        transcript_file,
                        title,
                        json,
                        no_save,
                    };
                    commands::extract_recipe(&settings, options).await?;
                }
                Commands::List { limit, search } => {
                    commands::list_recipes(&settings, limit, search)?;
                }
                Commands::View { id } => {
                    commands::view_recipe(&settings, &id)?;
                }
                Commands::Search { query } => {
                    commands::search_recipes(&settings, &query)?;
                }
                Commands::Delete { id } => {
                    commands::delete_recipe(&settings, &id)?;
                }
                Commands::Export { id, format, output } => {
                    commands::export_recipe(&settings, &id, &format, output)?;
                }
                Commands::Config(config_cmd) => {
                    commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
