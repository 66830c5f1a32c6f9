use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snapmark::api::{create_router, AppState};
use snapmark::config::Config;
use snapmark::db::{Database, DatabaseBackend, LibSqlBackend};

#[derive(Parser)]
#[command(name = "snapmark")]
#[command(about = "Self-hostable image-to-Markdown OCR service")]
struct Args {
    /// Bind address override (defaults to SNAPMARK_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port override (defaults to SNAPMARK_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snapmark=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.server.auth_tokens.is_empty() {
        tracing::warn!(
            "SNAPMARK_AUTH_TOKENS is not set — /save, /history and /settings are locked. Anonymous OCR still works."
        );
    }
    if config.ocr.api_key.is_none() {
        tracing::warn!(
            "OCR_API_KEY is not set — default-provider requests will be rejected upstream until callers bring their own keys."
        );
    }

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));

    tracing::info!(
        "Default OCR provider: {} ({})",
        config.ocr.provider,
        config.ocr.model
    );

    let state = AppState::new(config.clone(), db);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Snapmark starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
