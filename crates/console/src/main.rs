use anyhow::Context;

use gildedrose_console::ConsoleConfig;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env().context("invalid configuration")?;
    gildedrose_observability::init_with(config.log_format);

    tracing::info!(?config, "starting");

    let report = gildedrose_console::run(&config)?;
    print!("{report}");
    Ok(())
}
