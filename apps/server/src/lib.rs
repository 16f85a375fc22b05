//! # Pantry Server
//!
//! Serves the recipe and ingredient catalog over a read-only JSON API built on `Axum`,
//! with `OpenAPI` docs rendered by Scalar at `/api`.
//!
//! ## Example
//! ```no_run
//! use pantry_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4583)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use pantry::domain::config::{ApiConfig, SslConfig};
use pantry::kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// Grace period for in-flight requests after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder, loads the catalog and assembles the API state.
    ///
    /// # Errors
    /// Returns an error if:
    /// * SSL certificate/key files are configured but missing
    /// * The seed catalog cannot be read, parsed or indexed
    ///
    /// # Examples
    /// ```no_run
    /// # use pantry_server::Server;
    /// # fn example() -> anyhow::Result<()> {
    /// let server = Server::builder().build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        info!(address = %self.cfg.server.socket_addr(), "Initializing server");

        let slices = pantry::init(&self.cfg).context("Catalog bootstrap failed")?;

        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router: catalog, system routes and the docs UI.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until a shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address
    /// or if SSL/TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let server = &self.state.config.server;
        let address = server.socket_addr();
        let app = self.router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_signal(handle.clone()));

        match &server.ssl {
            Some(ssl) => {
                info!(%address, "Serving catalog over HTTPS");
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Failed to load SSL/TLS certificates")?;

                axum_server::bind_rustls(address, tls)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTPS server failed")?;
            },
            None => {
                info!(%address, "Serving catalog over HTTP");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTP server failed")?;
            },
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Fails when a configured certificate or key is missing; warns on a world-readable key.
fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    for (label, path) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
        if !path.exists() {
            anyhow::bail!("SSL {label} not found at: {}", path.display());
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(key = %ssl.key.display(), mode = format_args!("{mode:o}"), "SSL private key is readable by others");
        }
    }
    Ok(())
}

/// Starts a graceful shutdown of `handle` on the first SIGINT or SIGTERM.
async fn drain_on_signal(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(signal) => {
            info!(signal, grace_secs = SHUTDOWN_GRACE.as_secs(), "Draining connections");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        },
        Err(e) => error!("Error while waiting for shutdown signal: {e:#}"),
    }
}

/// Resolves with the name of the signal that arrived.
#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("Failed to install SIGTERM handler")?;

    tokio::select! {
        res = signal::ctrl_c() => res.context("Failed to listen for Ctrl+C").map(|()| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    signal::ctrl_c().await.context("Failed to listen for Ctrl+C")?;
    Ok("Ctrl+C")
}
