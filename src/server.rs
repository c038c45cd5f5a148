use std::future::Future;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::app;
use crate::config::Config;

/// Bind the configured port and serve until Ctrl+C or SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Backend running at {}", local_url(&listener)?);

    serve(listener, shutdown_signal()).await
}

/// URL announced at startup, using the port the listener actually bound.
fn local_url(listener: &TcpListener) -> Result<String> {
    let port = listener
        .local_addr()
        .context("Failed to read bound address")?
        .port();
    Ok(format!("http://localhost:{}", port))
}

/// Serve the application on an already-bound listener.
///
/// Returns once `shutdown` resolves and in-flight requests have completed.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app::router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
