//! Benchmark sorting algorithms over a generated dataset
//!
//! Runs one algorithm (or all five) several times and reports average time,
//! output footprint and comparison count.

use std::num::NonZeroUsize;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use env_logger::Env;
use log::info;
use serde::Serialize;
use sort_bench::{
    create_rng, generate_dataset, validate_dataset_size, Algorithm, Benchmark, ComparisonReport,
    Direction, Shape, StepRecorder,
};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(version, about, styles = STYLES)]
struct Args {
    /// Number of elements to generate (1 to 200,000)
    #[arg(short = 'n', long, value_parser = parse_size)]
    size: usize,

    /// Dataset shape: Random, Sorted, "Reverse Sorted" or "Nearly Sorted"
    #[arg(short, long, default_value = "Random")]
    shape: Shape,

    /// Algorithm to benchmark: bubble, insertion, selection, quick or merge
    #[arg(short, long, default_value = "quick", conflicts_with = "all")]
    algorithm: Algorithm,

    /// Benchmark all five algorithms on the same dataset
    #[arg(long)]
    all: bool,

    /// Sort in descending order
    #[arg(short, long)]
    reverse: bool,

    /// Runs per algorithm; reported metrics are averages
    #[arg(long, default_value = "3")]
    runs: NonZeroUsize,

    /// Seed for dataset generation
    #[arg(long)]
    seed: Option<u64>,

    /// Capture up to this many step frames of the benchmarked algorithm
    #[arg(long, value_name = "LIMIT", conflicts_with = "all")]
    record_steps: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{s}' is not a valid dataset size"))?;
    validate_dataset_size(size).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct StepCapture {
    captured: usize,
    dropped: usize,
    frames: Vec<Vec<i32>>,
}

#[derive(Serialize)]
struct Output {
    report: ComparisonReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<StepCapture>,
}

fn run(args: &Args) -> Result<Output> {
    let direction = Direction::from_reverse(args.reverse);
    let data = generate_dataset(args.size, args.shape, &mut create_rng(args.seed));
    info!("Dataset: {} | Size: {}", args.shape, data.len());

    let benchmark = Benchmark::new().runs(args.runs).direction(direction);
    let mut report = ComparisonReport::new(args.shape, data.len(), direction);

    let algorithms: Vec<Algorithm> =
        if args.all { Algorithm::ALL.to_vec() } else { vec![args.algorithm] };
    let mut steps = None;

    for algorithm in algorithms {
        info!("Running {algorithm}...");
        let result = match args.record_steps {
            Some(limit) => {
                let mut recorder = StepRecorder::with_limit(limit);
                let result = benchmark.run_observed(&algorithm, &data, &mut recorder);
                steps = Some(StepCapture {
                    captured: recorder.frames().len(),
                    dropped: recorder.dropped(),
                    frames: recorder.into_frames(),
                });
                result
            }
            None => benchmark.run(&algorithm, &data),
        };
        report.push(&result);
    }

    Ok(Output { report, steps })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let json = args.json;

    // Core data stays confined to the worker; only the finished output comes back
    let handle = thread::Builder::new()
        .name("benchmark".to_string())
        .spawn(move || run(&args))
        .context("Failed to spawn benchmark thread")?;

    let output = handle.join().map_err(|_| anyhow!("Benchmark thread panicked"))??;

    if json {
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
        println!("{text}");
    } else {
        print!("{}", output.report);
        if let Some(steps) = &output.steps {
            println!(
                "\nRecorded {} step frames ({} beyond the limit)",
                steps.captured, steps.dropped
            );
        }
    }

    Ok(())
}
