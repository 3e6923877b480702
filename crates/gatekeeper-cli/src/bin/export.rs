#![forbid(unsafe_code)]

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use gatekeeper_cli::{GateConfig, export, logging};
use gatekeeper_journal::SqliteHistory;

#[derive(Parser, Debug)]
#[command(name = "gatekeeper-export")]
#[command(about = "Export the attempt history as CSV, newest first")]
struct Args {
    /// History database. Defaults to attendance.db next to the executable.
    #[arg(long, env = "GATEKEEPER_DB")]
    db: Option<PathBuf>,
    /// Destination file. Overwritten if it exists.
    #[arg(long, value_name = "PATH")]
    csv: PathBuf,
    #[arg(long, env = "GATEKEEPER_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = match &args.db {
        Some(path) => GateConfig::new(path),
        None => GateConfig::beside_executable()?,
    };
    let db = config.db_path();
    if !db.exists() {
        bail!("no history database at {}", db.display());
    }
    let store = SqliteHistory::open(db).with_context(|| format!("opening {}", db.display()))?;
    let file = File::create(&args.csv)
        .with_context(|| format!("creating {}", args.csv.display()))?;
    let rows = export::export_history(&store, BufWriter::new(file))
        .with_context(|| format!("writing {}", args.csv.display()))?;

    println!("exported {rows} attempts to {}", args.csv.display());
    Ok(())
}
