//! tzglance library root.
//! Exposes the schedule evaluator, the snapshot scheduler, the settings
//! service and the CLI front-end.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, FileStore, SettingsService};
use crate::core::clock::{Clock, FixedClock, ShiftedClock, SystemClock, parse_instant};
use crate::errors::AppResult;
use clap::Parser;
use std::sync::Arc;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub cfg: Config,
    pub settings: Arc<SettingsService>,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn new(cfg: Config, clock: Arc<dyn Clock>) -> Self {
        let settings = Arc::new(SettingsService::new(FileStore::new(&cfg.settings_file)));
        Self {
            cfg,
            settings,
            clock,
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, ctx),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, ctx),
        Commands::Overlap => cli::commands::overlap::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
    }
}

fn build_clock(cli: &Cli) -> AppResult<Arc<dyn Clock>> {
    let Some(at) = &cli.at else {
        return Ok(Arc::new(SystemClock));
    };

    let instant = parse_instant(at)?;
    // A live dashboard keeps running from the pinned instant.
    let clock: Arc<dyn Clock> = match cli.command {
        Commands::Watch { .. } => Arc::new(ShiftedClock::starting_at(instant)),
        _ => Arc::new(FixedClock(instant)),
    };
    Ok(clock)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg = Config::resolve(cli.config.as_deref());
    let clock = build_clock(&cli)?;

    let ctx = AppContext::new(cfg, clock);
    dispatch(&cli, &ctx)
}
