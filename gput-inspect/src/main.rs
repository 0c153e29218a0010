//! Command-line inspector for gput's interleaved vertex layouts.

mod cli;
mod logging;
mod report;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use gput_data::VertexLayout;

use crate::{
    cli::Cli,
    logging::{LoggingConfig, init_logging},
    report::format_layout,
};

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    init_logging(LoggingConfig::from_env()).wrap_err("Failed to initialize logging")?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "gput-inspect starting up");

    let cli = Cli::parse();

    if cli.list_types {
        Cli::display_type_list();
        return Ok(());
    }

    let layout = VertexLayout::pack(&cli.elements).wrap_err("Failed to pack vertex layout")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&layout).wrap_err("Failed to serialize layout")?;
        println!("{json}");
    } else {
        let report =
            format_layout(&layout, cli.first_index).wrap_err("Failed to format layout")?;
        print!("{report}");
    }

    Ok(())
}
