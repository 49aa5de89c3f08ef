mod agents;
mod cli;
mod config;
mod errors;
mod integrations;
mod llm_client;
mod models;
mod report;
mod routes;
mod state;
mod workflow;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agents::Collaborators;
use crate::cli::{Cli, Command, ServeArgs};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fails fast when ANTHROPIC_API_KEY is missing
    let config = Config::from_env()?;

    // Logs go to stderr so `run` output on stdout stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Command::Run(args)) => cli::run_pipeline(config, args).await,
        Some(Command::Serve(args)) => serve(config, args).await,
        None => serve(config, ServeArgs::default()).await,
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    info!("Starting Hiring Copilot API v{}", env!("CARGO_PKG_VERSION"));

    let collaborators = Collaborators::from_config(&config)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    if config.google_calendar_token.is_none() {
        info!("GOOGLE_CALENDAR_TOKEN not set; interview scheduling will fail when attempted");
    }
    if config.slack_bot_token.is_none() {
        info!("SLACK_BOT_TOKEN not set; notifications will be recorded as failed");
    }

    let state = AppState {
        workflow: Arc::new(Workflow::new(collaborators)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let port = args.port.unwrap_or(config.port);
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
