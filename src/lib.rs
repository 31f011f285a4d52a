pub mod cli;
pub mod lookml;
pub mod reconcile;
pub mod render;
pub mod schema;
pub mod typemap;

use std::{env, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::cli::Cli;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging(verbose: bool) {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            builder.filter_module("lookml_scaffold", level);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(&cli)
}

/// Loads the table description, scans the LookML view, and prints a rendered
/// block for every described column the view does not reference yet. With
/// `--check`, also warns about references the description does not explain.
pub fn execute(cli: &Cli) -> Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    info!("Reading table description from '{}'", cli.table.display());
    let table = schema::SchemaTable::load(&cli.table)
        .with_context(|| format!("Loading table description from {:?}", cli.table))?;

    info!("Scanning LookML file '{}'", cli.lookml.display());
    let outcome = lookml::scan(&cli.lookml)
        .with_context(|| format!("Scanning LookML file {:?}", cli.lookml))?;

    if cli.check {
        for name in &outcome.occurrences {
            if !table.contains(&name.to_lowercase()) {
                println!("# column not found in table description: [{name}]");
            }
        }
    }

    let keys = table.keys();
    let pending = reconcile::pending(&keys, &outcome.referenced);
    debug!("Columns to render: {pending:?}");
    info!(
        "{} of {} described column(s) not referenced in LookML",
        pending.len(),
        keys.len()
    );

    for key in &pending {
        if let Some(column) = table.get(key) {
            println!("{}", render::render_column(column, cli.suffix.as_deref()));
        }
    }
    Ok(())
}
