#![allow(clippy::doc_markdown)]
//! `FriendGraph` Server - REST API for the in-memory user graph.

use clap::Parser;
use friendgraph_core::config::DEFAULT_CONFIG_FILE;
use friendgraph_core::FriendGraphConfig;
use friendgraph_server::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FriendGraph Server - users and friendships over HTTP
#[derive(Parser, Debug)]
#[command(name = "friendgraph-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (a missing file falls back to defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Host address to bind to (overrides configuration)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = FriendGraphConfig::load(&args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FriendGraph server...");
    tracing::info!("User store is in-memory. Data will NOT persist across restarts.");

    let state = Arc::new(AppState::default());
    let app = build_router(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use friendgraph_server::ApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/swagger.json", ApiDoc::openapi()))
    };

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("FriendGraph server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
