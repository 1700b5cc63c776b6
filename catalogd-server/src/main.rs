//! catalogd - product catalog CRUD service over PostgreSQL
//!
//! Boots the service: configuration from flags and environment, a
//! connection pool with a startup connectivity check, migrations,
//! optional example rows, then the HTTP server.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use catalogd_core::config::Config;
use catalogd_server::db::{self, migrations};
use catalogd_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "catalogd",
    author,
    version,
    about = "Product catalog CRUD service over PostgreSQL"
)]
struct Cli {
    /// PostgreSQL connection string (required)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', env = "CATALOGD_BIND")]
    bind: Option<String>,

    /// Origin allowed for cross-origin requests (default: http://localhost:3000)
    #[arg(long, env = "CATALOGD_CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Maximum connections in the database pool (default: 5)
    #[arg(long, env = "CATALOGD_MAX_CONNECTIONS")]
    max_connections: Option<String>,

    /// Insert example products after migrating
    #[arg(long)]
    seed: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = Config::resolve(cli.database_url, cli.bind, cli.cors_origin, cli.max_connections)
        .context("Failed to resolve configuration")?;

    let pool = db::create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;

    db::ping(&pool)
        .await
        .context("Database is unreachable at startup")?;
    tracing::info!("Database connection verified");

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if cli.seed {
        migrations::seed(&pool)
            .await
            .context("Failed to seed example products")?;
    }

    let server_config = ServerConfig {
        bind_addr: config.bind_addr,
        cors_origin: config.cors_origin,
    };

    run_server(pool, server_config).await.context("Server error")?;

    Ok(())
}
