// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! voxsweep CLI entrypoint.
//!
//! Runs swept-box scenarios against a sparse voxel world and prints every
//! contact the box made on the way.
//!
//! # Usage
//! ```text
//! voxsweep run <scenario.json> [--config FILE] [--json] [--skip-translate] [-v]
//! voxsweep check <scenario.json> [--config FILE]
//! ```
//!
//! The CLI exits with code `0` on success and non-zero on error. Logs go to
//! stderr; `RUST_LOG` overrides the level picked by `-v`.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;
mod scenario;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxsweep_core::{ContactLog, SweepContext, Translate};

use crate::report::Report;
use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "voxsweep", author, version, about = "Sweep a box through a voxel grid")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep the scenario's box along its displacement and report every contact
    Run {
        /// Path to the scenario JSON file
        scenario: PathBuf,
        /// Sweep config JSON (default: platform config dir, then built-ins)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
        /// Report the displacement without moving the box
        #[arg(long)]
        skip_translate: bool,
    },
    /// Validate a scenario and report whether the starting box overlaps solid voxels
    Check {
        /// Path to the scenario JSON file
        scenario: PathBuf,
        /// Sweep config JSON (default: platform config dir, then built-ins)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Run {
            scenario,
            config,
            json,
            skip_translate,
        } => {
            let translate = if skip_translate {
                Translate::Skip
            } else {
                Translate::Apply
            };
            run(&scenario, config.as_deref(), translate, json)
        }
        Command::Check { scenario, config } => check(&scenario, config.as_deref()),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn run(path: &Path, config: Option<&Path>, translate: Translate, json: bool) -> Result<()> {
    let config = settings::load(config)?;
    let mut scenario = Scenario::load(path)?;
    let start = scenario.body;
    info!(
        scenario = %path.display(),
        solid = scenario.world.len(),
        "running sweep"
    );

    let mut log = ContactLog::new(scenario.response);
    let outcome = SweepContext::new(config)
        .sweep(
            &scenario.world,
            &mut scenario.body,
            scenario.displacement,
            &mut log,
            translate,
        )
        .with_context(|| format!("sweep failed for {}", path.display()))?;
    info!(
        distance = outcome.distance,
        contacts = outcome.contacts,
        "sweep finished"
    );

    let report = Report::new(
        &outcome,
        log.contacts(),
        start,
        scenario.body,
        translate == Translate::Apply,
    );
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}

fn check(path: &Path, config: Option<&Path>) -> Result<()> {
    let config = settings::load(config)?;
    let scenario = Scenario::load(path)?;
    let blocked = scenario.world.overlapping(&scenario.body, config.epsilon);
    if blocked.is_empty() {
        println!(
            "ok: box is clear ({} solid voxels in scenario)",
            scenario.world.len()
        );
    } else {
        println!("overlap: box starts inside {} solid voxel(s)", blocked.len());
        for cell in blocked {
            println!("  [{}, {}, {}]", cell[0], cell[1], cell[2]);
        }
    }
    Ok(())
}
