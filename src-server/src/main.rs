use anyhow::{bail, Context};
use clap::Parser;
use rolling_logger::{LevelFilter, LoggerConfig};
use std::path::PathBuf;
use tracing::info;
use wedding_server_lib::config::{load_settings, AppEnv};
use wedding_server_lib::repository::{init_db, SqliteGuestRepository, SqliteRegistryRepository};
use wedding_server_lib::{seed, Server};

#[derive(Debug, Parser)]
#[command(version, about = "RSVP and registry backend for the wedding site")]
struct Cli {
    /// TOML file layered over the environment defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the sample guests and registry items, then exit (local only)
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings =
        load_settings(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let level: LevelFilter = settings
        .logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", settings.logging.level))?;
    let _log = rolling_logger::init_with(
        LoggerConfig::new(&settings.logging.dir, env!("CARGO_PKG_NAME"))
            .max_files(settings.logging.max_files)
            .level(level),
    )
    .context("Failed to initialize logging")?;

    info!(environment = %settings.environment, "Configuration loaded");

    if cli.seed {
        if settings.environment != AppEnv::Local {
            bail!("Seeding is only allowed in the local environment");
        }
        let db = init_db(&settings.database.path)
            .await
            .context("Failed to open database")?;
        seed::seed_sample_data(
            &SqliteGuestRepository::new(db.connection()),
            &SqliteRegistryRepository::new(db.connection()),
        )
        .await
        .context("Failed to seed database")?;
        db.close().await;
        return Ok(());
    }

    Server::builder().settings(settings).build().await?.run().await
}
