// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Night Shift daemon (`nsd`)
//!
//! Runs the scheduler against the persisted configuration, imports queued
//! project descriptors from the inbox, and delivers run notifications.

mod env;
mod inbox;
mod lifecycle;

use std::ffi::OsStr;
use std::process::ExitCode;
use std::time::Duration;

use lifecycle::{Config, LifecycleError, StartupResult};
use ns_adapters::{DesktopNotifyAdapter, NoopNotifyAdapter};
use ns_engine::EventDispatcher;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// How long the dispatcher gets to flush the final notifications
const DISPATCH_DRAIN: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("nsd: {e}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = match init_tracing(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("nsd: failed to open log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "daemon failed");
            eprintln!("nsd: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), LifecycleError> {
    let StartupResult { daemon, events } = lifecycle::startup(&config)?;
    info!(state_dir = %config.state_dir.display(), "daemon started");

    let dispatcher = if env::notifications_enabled() {
        tokio::spawn(EventDispatcher::new(DesktopNotifyAdapter::new()).run(events))
    } else {
        tokio::spawn(EventDispatcher::new(NoopNotifyAdapter).run(events))
    };
    let scheduler = tokio::spawn(daemon.engine.clone().run_scheduler(config.tick_override));

    tokio::signal::ctrl_c().await?;
    info!("received interrupt");

    daemon.shutdown().await?;
    if let Err(e) = scheduler.await {
        error!(error = %e, "scheduler task failed");
    }
    // Every engine handle is gone, so the dispatcher sees the channel close
    if tokio::time::timeout(DISPATCH_DRAIN, dispatcher).await.is_err() {
        info!("dispatcher did not drain in time");
    }
    Ok(())
}

fn init_tracing(config: &Config) -> std::io::Result<WorkerGuard> {
    let dir = config.log_path.parent().unwrap_or(&config.state_dir);
    let file = config.log_path.file_name().unwrap_or_else(|| OsStr::new("daemon.log"));
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
    Ok(guard)
}
