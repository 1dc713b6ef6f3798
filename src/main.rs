mod auth;
mod cli;
mod collector;
mod config;
mod error;
mod gitlab;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::info;

use auth::Token;
use cli::Cli;
use collector::Collector;
use config::Settings;
use gitlab::GitLabClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    // Refuse to start serving without the upstream secret.
    let token = Token::from_env(&settings.token)?;

    let client = GitLabClient::new(&settings.gitlab_api_base, token)?;
    let collector = Collector::new(client, settings.group.clone());
    let app = server::build_router(Arc::new(collector));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving metrics on port {}", settings.port);

    axum::serve(listener, app).await?;

    Ok(())
}
