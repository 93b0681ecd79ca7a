//! Console front end: seeds the sample stock, advances it, prints a report.

pub mod config;
pub mod report;
pub mod sample;

use anyhow::Context;
use tracing::info;

pub use config::{ConfigError, ConsoleConfig, ReportFormat};

/// Seed the sample stock, advance it `config.days` times and render the report.
pub fn run(config: &ConsoleConfig) -> anyhow::Result<String> {
    let mut inventory = sample::sample_inventory().context("failed to seed sample stock")?;

    let mut engine = inventory.engine();
    for _ in 0..config.days {
        engine.advance_one_day();
    }
    info!(days = config.days, items = inventory.len(), "simulation finished");

    report::render(inventory.items(), config.report_format).context("failed to render report")
}
