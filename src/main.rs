use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use imgmanip::{validate_config, BatchProcessor, Cli};
use log::{Level, LevelFilter, Log, Metadata};

// Skip warnings from these modules stay on even under a stricter RUST_LOG.
const SKIP_WARNING_MODULES: [&str; 2] = [
    "imgmanip::processors::batch",
    "imgmanip::core::operations",
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let config = cli.into_config();
    if let Err(e) = validate_config(&config) {
        Cli::command().error(ErrorKind::ValueValidation, e).exit();
    }

    let stats = BatchProcessor::new(config).run();

    for (path, reason) in &stats.skipped {
        log::debug!("Skipped {}: {}", path.display(), reason);
    }

    Ok(())
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let requested = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .build();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    for module in SKIP_WARNING_MODULES {
        let warning = Metadata::builder().level(Level::Warn).target(module).build();
        if !requested.enabled(&warning) {
            builder.filter_module(module, LevelFilter::Warn);
        }
    }

    builder.try_init().context("Failed to initialise logging")
}
