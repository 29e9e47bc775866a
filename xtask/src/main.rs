use anyhow::{Context, Result};
use arbor::sort::bench;
use arbor::{Algorithm, BenchConfig, Measurement};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Arbor workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benches and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the instrumented sort comparison and write a JSON report
    Compare {
        /// Input sizes to measure
        #[arg(long, value_delimiter = ',', default_values_t = [100, 1_000, 5_000])]
        sizes: Vec<usize>,

        /// Shape of the generated input
        #[arg(long, value_enum, default_value_t = Shape::Random)]
        shape: Shape,

        /// RNG seed, for reproducible inputs
        #[arg(long, default_value_t = 275)]
        seed: u64,

        /// JSON file with a `BenchConfig`; defaults to every algorithm
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to write the JSON report
        #[arg(long, default_value = "benchmark_results/sort_comparison.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Shape {
    Random,
    Sorted,
    Reversed,
    NearlySorted,
}

const BENCHES: &[&str] = &[
    "sort_benchmark",
    "graph_benchmark",
    "tree_benchmark",
    "linked_list_benchmark",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Compare {
            sizes,
            shape,
            seed,
            config,
            output,
        } => compare(&sizes, shape, seed, config.as_deref(), &output)?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    for bench in BENCHES {
        println!("\n>>> {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: bench {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results: BTreeMap<String, f64> = BTreeMap::new();
    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Ops/s |")?;
    writeln!(file, "|---|---|")?;
    for (workload, ops) in &results {
        writeln!(file, "| {workload} | {} |", format_ops(*ops))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output tree. Estimates live at
/// `<group>/<bench>[/<param>]/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(&path, results);
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(sample_dir) = path.parent() else {
            continue;
        };
        if sample_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(workload_dir) = sample_dir.parent() else {
            continue;
        };
        let Some(workload) = workload_dir
            .strip_prefix("target/criterion")
            .ok()
            .and_then(|p| p.to_str())
        else {
            continue;
        };

        // Throughput comes from benchmark.json when the bench declared one.
        let elements = read_json(&sample_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        let Some(time_ns) = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
        else {
            continue;
        };
        if time_ns > 0.0 {
            let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
            results.insert(workload.to_owned(), metric);
        }
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

#[derive(Serialize)]
struct ComparisonReport {
    seed: u64,
    shape: Shape,
    config: BenchConfig,
    measurements: Vec<Measurement>,
}

fn compare(
    sizes: &[usize],
    shape: Shape,
    seed: u64,
    config: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let config = match config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid bench config in {}", path.display()))?
        }
        None => BenchConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut measurements = Vec::new();

    print_complexity_table(&config.algorithms);
    for &size in sizes {
        let data = generate(&mut rng, size, shape);
        println!("\n  n = {size} ({shape:?})");
        println!(
            "  {:<10} {:>8} {:>12} {:>12} {:>12}",
            "Algorithm", "Size", "Time", "Comparisons", "Swaps"
        );
        for m in bench::run(&config, &data).context("Benchmark run failed")? {
            anyhow::ensure!(m.sorted, "{} returned unsorted output", m.algorithm);
            println!("  {m}");
            measurements.push(m);
        }
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let report = ComparisonReport {
        seed,
        shape,
        config,
        measurements,
    };
    fs::write(output, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("\nReport written to {}", output.display());
    Ok(())
}

fn generate(rng: &mut StdRng, size: usize, shape: Shape) -> Vec<u32> {
    let mut data: Vec<u32> = (0..size).map(|_| rng.gen_range(0..10_000)).collect();
    match shape {
        Shape::Random => {}
        Shape::Sorted => data.sort_unstable(),
        Shape::Reversed => data.sort_unstable_by(|a, b| b.cmp(a)),
        Shape::NearlySorted => {
            data.sort_unstable();
            // Disturb about 5% of positions.
            for _ in 0..size / 20 {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                data.swap(i, j);
            }
        }
    }
    data
}

fn print_complexity_table(algorithms: &[Algorithm]) {
    println!(
        "  {:<10} {:>10} {:>10} {:>10} {:>8} {:>7}",
        "Algorithm", "Best", "Average", "Worst", "Space", "Stable"
    );
    let mut seen = Vec::new();
    for &algorithm in algorithms {
        if seen.contains(&algorithm) {
            continue;
        }
        seen.push(algorithm);
        let c = algorithm.complexity();
        println!(
            "  {:<10} {:>10} {:>10} {:>10} {:>8} {:>7}",
            algorithm.name(),
            c.best,
            c.average,
            c.worst,
            c.space,
            if c.stable { "Yes" } else { "No" }
        );
    }
}
