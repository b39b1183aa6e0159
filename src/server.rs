//! Server Module
//!
//! TLS listener startup and graceful shutdown around the cache router.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::signal;
use tracing::info;

use crate::api::{create_router, AppState};

/// Installs the ring crypto provider for rustls.
///
/// Must run before any TLS config is built. Later calls are no-ops.
pub fn install_crypto_provider() -> anyhow::Result<()> {
    // Err only means some provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
    rustls::crypto::CryptoProvider::get_default()
        .map(|_| ())
        .ok_or_else(|| anyhow!("Failed to install default crypto provider"))
}

/// Loads a PEM certificate chain and private key.
pub async fn load_tls(cert: &Path, key: &Path) -> anyhow::Result<RustlsConfig> {
    RustlsConfig::from_pem_file(cert, key).await.with_context(|| {
        format!(
            "Failed to load TLS key pair from {} and {}",
            cert.display(),
            key.display()
        )
    })
}

/// Serves the cache API over TLS until `handle` is shut down.
///
/// Returns once the listener has stopped and in-flight requests have drained.
pub async fn serve(
    addr: SocketAddr,
    tls: RustlsConfig,
    state: AppState,
    handle: Handle,
) -> anyhow::Result<()> {
    let app = create_router(state);

    axum_server::bind_rustls(addr, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .with_context(|| format!("Server on {} failed", addr))
}

/// Waits for Ctrl+C or SIGTERM, then starts a graceful shutdown on `handle`.
///
/// New connections are refused immediately; open ones get `grace` to finish,
/// or unlimited time when `grace` is `None`.
pub async fn shutdown_signal(handle: Handle, grace: Option<Duration>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    handle.graceful_shutdown(grace);
}
