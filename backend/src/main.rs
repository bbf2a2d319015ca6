//! Backend entry-point: loads settings, prepares the score store and serves
//! the leaderboard API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use scoreboard::config::ScoreboardSettings;
use scoreboard::inbound::http::health::HealthState;
use scoreboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server};

fn init_tracing(settings: &ScoreboardSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter()));
    let result = if settings.debug {
        fmt().with_env_filter(filter).pretty().try_init()
    } else {
        fmt().with_env_filter(filter).json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn load_settings() -> Result<ScoreboardSettings> {
    let args: Vec<OsString> = std::env::args_os().collect();
    ScoreboardSettings::load_from_iter(args)
        .map_err(|err| eyre!("failed to load configuration: {err}"))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = load_settings()?;
    init_tracing(&settings);

    let bind_addr = settings
        .bind_addr()
        .wrap_err_with(|| format!("invalid listen host {:?}", settings.host()))?;
    let database_url = settings.database_url();

    run_migrations(&database_url)
        .await
        .wrap_err("failed to prepare score store")?;
    let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .await
        .wrap_err("failed to open score store")?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_docs(settings.debug);
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, database = %database_url, debug = settings.debug, "listening");

    // Actix stops the server on the same signal; flag liveness first so
    // probes see the drain.
    let drain_state = health_state.clone();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            drain_state.mark_unhealthy();
            info!("shutdown requested");
        }
    });

    server.await.wrap_err("server terminated with an error")
}
