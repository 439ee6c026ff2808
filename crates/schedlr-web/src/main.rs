use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use schedlr_web::{router, AppState, Cli, ServerError};

const DEFAULT_LOG_FILTER: &str = "schedlr=info,schedlr_core=info,schedlr_web=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "schedlr stopped");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let cli = Cli::parse();
    let state = AppState::from_cli(&cli)?;

    let addr = cli.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "schedlr listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
