#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gatekeeper_cli::loadtest::{self, Report, Traffic};
use gatekeeper_cli::logging;
use gatekeeper_journal::{HistoryStore, MemoryHistory, SqliteHistory, Validator};
use gatekeeper_types::Category;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "gatekeeper-loadtest")]
#[command(about = "Run generated scans through the validator and report the outcome mix")]
struct Args {
    /// Number of scans to run.
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Write to this history database instead of an in-memory one.
    #[arg(long)]
    db: Option<PathBuf>,
    #[arg(long, default_value = "SampleEvent")]
    event: String,
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    min_sequence: i64,
    /// Seed for reproducible traffic.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, env = "GATEKEEPER_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let traffic = Traffic {
        event: args.event.clone(),
        min_sequence: args.min_sequence,
    };
    let report = match &args.db {
        Some(path) => {
            let store = SqliteHistory::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            drive(store, &traffic, &args)?
        }
        None => drive(MemoryHistory::new(), &traffic, &args)?,
    };

    print_report(&args, &report);
    Ok(())
}

fn drive<S: HistoryStore>(store: S, traffic: &Traffic, args: &Args) -> anyhow::Result<Report> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let validator = Validator::new(store);
    loadtest::run(&validator, traffic, args.count, &mut rng).context("load run aborted")
}

fn print_report(args: &Args, report: &Report) {
    let summary = &report.summary;
    println!("scans:      {}", summary.total);
    println!("event:      {} (min sequence {})", args.event, args.min_sequence);
    println!("elapsed:    {:.2}s", report.elapsed.as_secs_f64());
    println!("throughput: {:.1} scans/s", report.throughput());
    println!();
    println!("OK: {:>6}", summary.ok);
    println!("NG: {:>6}", summary.ng);
    println!();
    for category in Category::ALL {
        let count = summary.count(category);
        if count == 0 {
            continue;
        }
        let percent = summary.percent(category);
        let bar = "#".repeat((percent / 2.0) as usize);
        println!("  {:<15} {count:>6} ({percent:5.1}%) {bar}", category.as_str());
    }
}
