#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line transport for the checkpoint route operations.
//!
//! Results are printed to stdout as JSON; logs go to stderr.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checkpoint_route_core::{HeuristicMode, SearchConfig, WorldLayout};
use checkpoint_route_system_operations::Operations;
use checkpoint_route_world::default_layout;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::settings::{load_layout, Settings};

const DEFAULT_LOG_DIRECTIVE: &str = "checkpoint_route=info";

/// Finds routes that resolve every checkpoint on the way to the goal.
#[derive(Debug, Parser)]
#[command(name = "checkpoint-route", version, about)]
struct Cli {
    /// TOML settings file with `[search]` and `[terrain_costs]` tables.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter applied when `RUST_LOG` is not set.
    #[arg(long, global = true, value_name = "FILTER", default_value = DEFAULT_LOG_DIRECTIVE)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the world snapshot.
    World(WorldArgs),
    /// Run the route search and print its result.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct WorldArgs {
    /// TOML layout file replacing the built-in default world.
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[command(flatten)]
    world: WorldArgs,

    /// Drop the heuristic and run a uniform-cost search.
    #[arg(long)]
    uniform_cost: bool,

    /// Keep expanding states already settled at a lower cost.
    #[arg(long)]
    no_settle: bool,

    /// Give up after this many expansions.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    expansion_limit: Option<u64>,
}

impl SearchArgs {
    /// Layers command-line flags over the configured search.
    fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if self.uniform_cost {
            config.heuristic = HeuristicMode::UniformCost;
        }
        if self.no_settle {
            config.settle_duplicates = false;
        }
        if let Some(limit) = self.expansion_limit {
            config.expansion_limit = Some(limit);
        }
        config
    }
}

/// Entry point for the checkpoint route command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let output = match &cli.command {
        Command::World(args) => {
            let layout = resolve_layout(args.layout.as_deref(), &settings)?;
            let snapshot = Operations::new(settings.search)
                .current_world_with_layout(layout)
                .context("failed to build world")?;
            encode(&snapshot, args.pretty)?
        }
        Command::Search(args) => {
            let layout = resolve_layout(args.world.layout.as_deref(), &settings)?;
            let result = Operations::new(args.apply(settings.search))
                .run_search_with_layout(layout)
                .context("failed to build world")?;
            encode(&result, args.world.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

fn init_tracing(fallback: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("invalid log filter `{fallback}`"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn resolve_layout(path: Option<&Path>, settings: &Settings) -> Result<WorldLayout> {
    let mut layout = match path {
        Some(path) => load_layout(path)?,
        None => default_layout(),
    };
    settings.apply_costs(&mut layout);
    Ok(layout)
}

fn encode<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.context("failed to encode output as JSON")
}
