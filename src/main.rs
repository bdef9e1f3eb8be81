//! Ticker Table - Main Entry Point

use ticker_table::app::run_app;
use ticker_table::helpers::{get_or_create_data_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console logging, plus a daily log file outside development builds
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    if is_development() {
        registry.init();
        return None;
    }

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ticker-table.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            registry.init();
            tracing::warn!(error = %e, "Log directory unavailable, logging to console only");
            None
        }
    }
}

fn main() {
    let _guard = init_logging();

    tracing::info!("Starting Ticker Table...");

    run_app();
}
