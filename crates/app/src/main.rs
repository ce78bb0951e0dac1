//! `rickdex` -- renders the Rick & Morty character grid.
//!
//! Mounts the view, waits for the single fetch to settle, prints the
//! rendered page to stdout and tears the view down. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable               | Default                                     | Description                  |
//! |------------------------|---------------------------------------------|------------------------------|
//! | `CHARACTER_API_URL`    | `https://rickandmortyapi.com/api/character` | Character-list endpoint      |
//! | `RICKDEX_LOCALE`       | `en`                                        | `en` or `es`                 |
//! | `RICKDEX_OUTPUT`       | `text`                                      | `text` or `html`             |
//! | `RICKDEX_GRID_COLUMNS` | `3`                                         | Cards per row in text output |

use std::process::ExitCode;
use std::sync::Arc;

use rickdex_app::config::AppConfig;
use rickdex_app::run::{present_once, RunOutcome};
use rickdex_client::api::CharacterApi;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Conventional exit status for a process stopped by Ctrl-C.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rickdex_app=info,rickdex_view=info,rickdex_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        api_url = %config.api_url,
        locale = config.locale.as_str(),
        output = config.output.as_str(),
        grid_columns = config.grid_columns,
        "Starting rickdex",
    );

    let api = Arc::new(CharacterApi::new(config.api_url.clone()));

    match present_once(api, &config, shutdown_signal()).await {
        RunOutcome::Rendered { page, failed } => {
            print!("{page}");
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        RunOutcome::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
