use anyhow::Context;
use fiesta_server::{Config, ServerState, logger};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, timeout_ms = config.request_timeout_ms, "Fiesta cart server listening");

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("Shutdown signal received");
        signal.cancel();
    });

    fiesta_server::serve(listener, ServerState::new(), &config, shutdown).await?;
    tracing::info!("Server stopped");
    Ok(())
}
