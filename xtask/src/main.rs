use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "tagstore workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dispatch benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Write the layout report of the demo alternative sets to disk
    Layout,
}

const BENCH: &str = "dispatch_benchmark";
const BASELINE: &str = "new";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Layout => write_layout()?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.arg("bench").arg("--bench").arg(BENCH);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn write_layout() -> Result<()> {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "layout_report"])
        .output()
        .context("Failed to run layout_report")?;
    if !output.status.success() {
        anyhow::bail!(
            "layout_report failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let stdout = String::from_utf8(output.stdout).context("layout_report wrote non-UTF-8")?;
    // The JSON document starts at the first '['; earlier lines are smoke checks.
    let json_start = stdout.find('[').context("no JSON in layout_report output")?;
    let reports: serde_json::Value =
        serde_json::from_str(&stdout[json_start..]).context("layout_report JSON is malformed")?;

    let path = Path::new("benchmark_results/layout.json");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&reports)?)?;
    println!("Layout written to {}", path.display());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Dispatch Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Group | Benchmark | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (group, benches) in &results {
        for (bench, time_ns) in benches {
            let ops = 1e9 / time_ns;
            let ops_str = if ops > 1_000_000.0 {
                format!("{:.2}M", ops / 1_000_000.0)
            } else if ops > 1_000.0 {
                format!("{:.2}K", ops / 1_000.0)
            } else {
                format!("{:.0}", ops)
            };
            writeln!(file, "| {} | {} | {:.2} ns | {} |", group, bench, time_ns, ops_str)?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../group/bench/new/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some(BASELINE) {
            continue;
        }
        let Some(bench_dir) = baseline_dir.parent() else { continue };
        let Some(group_dir) = bench_dir.parent() else { continue };
        let (Some(bench), Some(group)) = (
            bench_dir.file_name().and_then(|s| s.to_str()),
            group_dir.file_name().and_then(|s| s.to_str()),
        ) else {
            continue;
        };
        if bench == "report" || group == "report" {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else { continue };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) else { continue };
        if let Some(time_ns) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .filter(|t| *t > 0.0)
        {
            results
                .entry(group.to_string())
                .or_default()
                .insert(bench.to_string(), time_ns);
        }
    }
}
