//! liftsim: run the single-cabin dispatch engine over a request file or a
//! generated passenger list and report how every passenger fared.
//!
//! ```text
//! liftsim data/sample.txt --trace
//! liftsim --generate 50 --seed 7 --floors 20 --ticks 400 --policy sweep
//! liftsim --config data/liftsim.toml --out output/liftsim
//! ```

mod config;
mod trace;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lift_core::{PolicyKind, Request, SimRng};
use lift_dispatch::{DispatchBuilder, DispatchPolicy, Elevator, NearestStop, SweepPolicy};
use lift_output::{CsvWriter, RunOutputObserver, RunReport};
use lift_schedule::{PassengerGenerator, load_requests};

use config::{FileConfig, Settings};
use trace::TracePrinter;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[clap(name = "liftsim", version, about = "Single-cabin lift dispatch simulator")]
pub struct Args {
    /// Request file (`time origin destination` per line).  Without one, a
    /// random passenger list is generated.
    pub requests: Option<PathBuf>,

    /// TOML configuration file.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Number of floors.
    #[clap(long)]
    pub floors: Option<u32>,

    /// Ticks to simulate.
    #[clap(long)]
    pub ticks: Option<u64>,

    /// Direction policy: "nearest" or "sweep".
    #[clap(long)]
    pub policy: Option<String>,

    /// Generate N random passengers (ignored when a request file is given).
    #[clap(long, value_name = "N")]
    pub generate: Option<usize>,

    /// Seed for the passenger generator.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Write requests.csv and ticks.csv into this directory.
    #[clap(short, long)]
    pub out: Option<PathBuf>,

    /// Print every cabin event.
    #[clap(long)]
    pub trace: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[clap(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let loaded = match &args.requests {
        Some(path) => Some(
            load_requests(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };
    let header = loaded.as_ref().map(|f| f.header).unwrap_or_default();
    let settings = Settings::resolve(&args, &file, header)?;

    let requests = match loaded {
        Some(f) => f.requests,
        None => {
            let generator = PassengerGenerator::new(
                settings.sim.floors,
                settings.passengers,
                settings.window_ticks,
            );
            info!(
                "generating {} passengers over {} ticks (seed {})",
                settings.passengers, settings.window_ticks, settings.sim.seed
            );
            generator.generate(&mut SimRng::new(settings.sim.seed))?
        }
    };

    println!("=== liftsim ===");
    println!(
        "Floors: {}  |  Ticks: {}  |  Requests: {}  |  Policy: {}",
        settings.sim.floors,
        settings.sim.total_ticks,
        requests.len(),
        settings.sim.policy
    );
    println!();

    let builder = DispatchBuilder::from_config(&settings.sim, requests);
    match settings.sim.policy {
        PolicyKind::Nearest => simulate(builder.policy(NearestStop), &settings, args.trace),
        PolicyKind::Sweep   => simulate(builder.policy(SweepPolicy), &settings, args.trace),
    }
}

fn simulate<P: DispatchPolicy>(
    builder:  DispatchBuilder<P>,
    settings: &Settings,
    trace:    bool,
) -> Result<()> {
    let mut engine = builder.build()?;

    let output = match &settings.output_dir {
        Some(dir) => Some(RunOutputObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let mut observer = (output, trace.then(TracePrinter::default));

    let t0 = Instant::now();
    engine.run_with(settings.sim.total_ticks, &mut observer);
    let elapsed = t0.elapsed();

    if let Some(out) = observer.0.as_mut() {
        if let Some(e) = out.take_error() {
            return Err(e).context("writing run output");
        }
    }
    if trace {
        println!();
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = &settings.output_dir {
        println!("  output written to {}", dir.display());
    }
    println!("{}", RunReport::from_elevator(&engine));
    println!();
    print_requests(engine.requests());
    Ok(())
}

fn print_requests(requests: &[Request]) {
    fn cell<T: std::fmt::Display>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
    }

    println!(
        "{:<6} {:>6} {:>5} {:>5} {:>8} {:>8}",
        "Req", "Time", "From", "To", "Boarded", "Arrived"
    );
    println!("{}", "-".repeat(43));
    for (i, r) in requests.iter().enumerate() {
        println!(
            "{:<6} {:>6} {:>5} {:>5} {:>8} {:>8}",
            i,
            r.request_time().0,
            r.origin().0,
            r.destination().0,
            cell(r.boarded_at().map(|t| t.0)),
            cell(r.arrival_time().map(|t| t.0)),
        );
    }
}
