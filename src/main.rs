#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use praktikum::{cli, package, utils};

#[macro_use]
extern crate praktikum;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    dlog!(
        "mode={} packages={}",
        if cli.json { "json" } else { "text" },
        package::SAMPLE_PACKAGES.len()
    );

    for (tag, data) in package::SAMPLE_PACKAGES {
        let workout = package::read_package(tag, data)
            .with_context(|| format!("reading package {tag} {data:?}"))?;
        let report = workout.show_training_info();

        dlog!(
            "workout={} duration={}",
            report.training_type,
            utils::format_duration(utils::hours_to_duration(report.duration))
        );

        if cli.json {
            println!("{}", report.to_json().context("serializing report")?);
        } else {
            println!("{}", report.message());
        }
    }

    tracing::info!(workouts = package::SAMPLE_PACKAGES.len(), "done");
    Ok(())
}
