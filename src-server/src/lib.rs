//! # Wedding Server
//!
//! RSVP and registry backend for the wedding site, built on `axum` and SQLite.
//!
//! ## Example
//! ```no_run
//! use wedding_server_lib::{config::load_settings, Server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = load_settings(None)?;
//!     Server::builder().settings(settings).build().await?.run().await
//! }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod middleware;
pub mod normalize;
pub mod repository;
pub mod seed;
pub mod service;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::AppState;
use crate::config::Settings;
use crate::middleware::RateLimiter;
use crate::repository::{init_db, DbState, SqliteGuestRepository, SqliteRegistryRepository};
use crate::service::{RegistryService, RsvpService};

/// Wire the SQLite repositories into the handler state.
pub fn app_state(db: &DbState) -> AppState {
    let guests = Arc::new(SqliteGuestRepository::new(db.connection()));
    let registry = Arc::new(SqliteRegistryRepository::new(db.connection()));
    AppState {
        rsvp: Arc::new(RsvpService::new(guests)),
        registry: Arc::new(RegistryService::new(registry)),
    }
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    settings: Option<Settings>,
}

impl ServerBuilder {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Open the database, seed it when configured and assemble the state.
    ///
    /// # Errors
    /// Returns an error if no settings were given or the database cannot be
    /// opened or seeded.
    pub async fn build(self) -> Result<Server> {
        let settings = self.settings.context("Server settings are required")?;

        info!(
            environment = %settings.environment,
            database = %settings.database.path.display(),
            "Initializing server"
        );

        let db = init_db(&settings.database.path)
            .await
            .context("Failed to open database")?;

        if settings.seed_on_start {
            let guests = SqliteGuestRepository::new(db.connection());
            let registry = SqliteRegistryRepository::new(db.connection());
            let seeded = seed::seed_if_empty(&guests, &registry)
                .await
                .context("Failed to seed database")?;
            if !seeded {
                info!("Database already populated, skipping seed");
            }
        }

        let limiter = Arc::new(RateLimiter::new(
            settings.rate_limit.requests,
            settings.rate_limit.window(),
        ));

        Ok(Server {
            state: app_state(&db),
            settings,
            limiter,
            db,
        })
    }
}

/// A fully initialized server, ready to run.
#[must_use = "call .run().await to start the server"]
pub struct Server {
    settings: Settings,
    state: AppState,
    limiter: Arc<RateLimiter>,
    db: DbState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    pub fn router(&self) -> axum::Router {
        api::router(self.state.clone(), self.limiter.clone())
    }

    /// Serve until Ctrl+C or SIGTERM, then close the database.
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind or the server fails.
    pub async fn run(self) -> Result<()> {
        let address = SocketAddr::new(self.settings.server.host, self.settings.server.port);
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        let cleanup = self.limiter.spawn_cleanup();
        let app = self.router();

        info!("Starting HTTP server on http://{address}");

        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(async {
                if let Err(e) = shutdown_signal().await {
                    error!("Error while waiting for shutdown signal: {e}");
                    return;
                }
                info!("Shutdown signal received, starting graceful shutdown...");
            })
            .await
            .context("HTTP server failed")?;

        cleanup.abort();
        self.db.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
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
        res = ctrl_c => res,
        res = terminate => res,
    }
}
