//! mcache - A TLS-secured in-memory content cache server

use axum_server::Handle;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcache::{server, AppState, Config};

/// Main entry point for the mcache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Parse configuration from flags and environment variables
/// 3. Install the rustls crypto provider and load the TLS key pair
/// 4. Create an empty cache store
/// 5. Serve the API over TLS on the configured address
/// 6. Drain in-flight requests on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let (cert_file, key_file) = config.tls_paths();
    info!(
        "Configuration loaded: addr={}, dev={}, cert={}, key={}",
        config.addr,
        config.dev,
        cert_file.display(),
        key_file.display()
    );

    server::install_crypto_provider()?;
    let tls = server::load_tls(&cert_file, &key_file).await?;

    let state = AppState::default();
    info!("Cache store initialized");

    let handle = Handle::new();
    tokio::spawn(server::shutdown_signal(
        handle.clone(),
        config.shutdown_grace(),
    ));

    info!("mcache listening on https://{}. Ctrl+C to stop.", config.addr);
    server::serve(config.addr, tls, state, handle).await?;

    info!("Server shutdown complete");
    Ok(())
}
