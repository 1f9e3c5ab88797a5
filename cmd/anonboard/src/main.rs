//! # anonboard
//!
//! Entry point: loads settings, picks the document store named by
//! `DATABASE_URL`, and serves the board until Ctrl+C or SIGTERM.

mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{build_router, AppState};
use configs::{Settings, StoreBackend};
use domains::ThreadRepository;
use storage_adapters::InMemoryThreadRepository;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_error = configs::load_dotenv();
    let settings = Settings::load().context("invalid configuration")?;
    telemetry::init(settings.log_format)?;
    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, "ignoring unreadable .env file");
    }

    let repo = connect_store(&settings).await?;
    let state = AppState::new(repo, settings.response_mode);
    let app = build_router(state);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, mode = ?settings.response_mode, "anonboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn connect_store(settings: &Settings) -> anyhow::Result<Arc<dyn ThreadRepository>> {
    match settings.store_backend() {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory thread store; data is lost on exit");
            Ok(Arc::new(InMemoryThreadRepository::new()))
        }
        #[cfg(feature = "db-postgres")]
        StoreBackend::Postgres => {
            use secrecy::ExposeSecret;

            let repo = storage_adapters::PgThreadRepository::connect(
                settings.database_url.expose_secret(),
            )
            .await
            .context("failed to connect to postgres")?;
            Ok(Arc::new(repo))
        }
        #[cfg(not(feature = "db-postgres"))]
        StoreBackend::Postgres => {
            anyhow::bail!("built without the db-postgres feature; use DATABASE_URL=memory://")
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
