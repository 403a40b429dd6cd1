//! # Agramkow API Server
//!
//! A self-describing HTTP API server built on `Axum` with OpenAPI documentation
//! generated from route metadata.
//!
//! ## Example
//! ```no_run
//! use agk_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(3000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use agk::domain::config::ApiConfig;
use agk::kernel::config::listen_port;
use agk::kernel::server::ApiState;
use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

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

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Resolves the listen port (the `PORT` environment override wins;
    ///    malformed values fall back to the configured port with a warning)
    /// 2. Initializes every feature slice
    /// 3. Folds the slices into the shared application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * A feature slice fails to initialize
    /// * The API state registry cannot be finalized
    ///
    /// Both are fatal: the process must exit non-zero rather than serve in a
    /// partially-initialized state.
    ///
    /// # Examples
    /// ```no_run
    /// # use agk_server::Server;
    /// # fn example() -> anyhow::Result<()> {
    /// let server = Server::builder().build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(mut self) -> Result<Server> {
        // 1. Resolve the listen port
        self.cfg.server.port = listen_port(self.cfg.server.port);

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);

        info!(
            address = %address,
            "Initializing server"
        );

        // 2. Orchestrate feature slices
        let slices = agk::init().map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        // 3. Construct state using functional folding
        let state = slices
            .into_iter()
            .fold(ApiState::builder().config(self.cfg), |builder, slice| {
                builder.register_slice(slice)
            })
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
///
/// This struct is returned by [`ServerBuilder::build`] and contains
/// all necessary runtime state.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    ///
    /// This is the recommended way to initialize the server.
    ///
    /// # Examples
    /// ```no_run
    /// # use agk_server::Server;
    /// # fn example() -> anyhow::Result<()> {
    /// let server = Server::builder()
    ///     .port(3000)
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Assembles the application router: documented API routes, the `/api`
    /// documentation browser, and the `/api-json` artifact endpoint.
    ///
    /// # Errors
    /// Returns an error if the documentation artifact cannot be serialized.
    pub fn router(&self) -> Result<Router> {
        router::init(self.state.clone())
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if router assembly fails or the server fails to bind
    /// to the configured address.
    ///
    /// # Examples
    /// ```no_run
    /// # use agk_server::Server;
    /// # async fn example() -> anyhow::Result<()> {
    /// Server::builder()
    ///     .build()?
    ///     .run()
    ///     .await
    /// # }
    /// ```
    pub async fn run(self) -> Result<()> {
        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        // Spawn shutdown signal listener
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        self.serve(handle).await
    }

    /// Binds to the configured address and serves until the handle shuts down.
    ///
    /// The documentation endpoints are mounted before the listener accepts its
    /// first connection, so `handle.listening()` resolving guarantees the
    /// artifact is reachable.
    ///
    /// # Errors
    /// Returns an error if router assembly fails or the bind fails.
    pub async fn serve(self, handle: Handle<SocketAddr>) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = self.router()?;

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
///
/// This function waits for either:
/// * SIGINT (Ctrl+C)
/// * SIGTERM (sent by process managers like systemd)
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
