//! dining — command-line driver for the dining-table contention simulator.
//!
//! Runs one strategy to `max_ticks`, optionally writing CSV output, or runs
//! all three strategies on the same seed with `--compare` and prints a
//! fairness table.
//!
//! ```text
//! dining --actors 5 --strategy atomic --ticks 500 --output output/atomic
//! dining --config run.json --compare
//! RUST_LOG=dp_sim=debug dining --ticks 20
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dp_core::{SimConfig, StrategyKind, Tick};
use dp_output::{CsvWriter, OutputWriter, SimOutputObserver};
use dp_sim::{RunSummary, SimObserver, TickReport, compare_strategies};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Command line arguments.  Flags override values loaded with `--config`.
#[derive(Parser, Debug)]
#[command(name = "dining")]
#[command(about = "Turn-based dining-philosophers resource contention simulator")]
struct Args {
    /// JSON file holding a full or partial `SimConfig`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of actors (and resources) around the table
    #[arg(long)]
    actors: Option<usize>,

    /// Per-tick probability that a THINKING actor becomes HUNGRY
    #[arg(long)]
    hungry_chance: Option<f64>,

    /// Per-tick probability that an EATING actor finishes
    #[arg(long)]
    full_chance: Option<f64>,

    /// naive, atomic, or cooperative
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Interval between actor snapshots (in ticks)
    #[arg(long)]
    output_interval: Option<u64>,

    /// Stalled ticks before a deadlock is reported; 0 disables detection
    #[arg(long)]
    deadlock_window: Option<u64>,

    /// Directory for actor_snapshots.csv and tick_summaries.csv
    #[arg(long)]
    output: Option<PathBuf>,

    /// Run every strategy on the same seed and print a comparison
    #[arg(long)]
    compare: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(v) = self.actors          { config.actor_count = v; }
        if let Some(v) = self.hungry_chance   { config.hungry_chance = v; }
        if let Some(v) = self.full_chance     { config.full_chance = v; }
        if let Some(v) = self.strategy        { config.strategy = v; }
        if let Some(v) = self.seed            { config.seed = v; }
        if let Some(v) = self.ticks           { config.max_ticks = v; }
        if let Some(v) = self.output_interval { config.output_interval_ticks = v; }
        if let Some(v) = self.deadlock_window { config.deadlock_window = v; }
        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Counts rows, reports deadlocks, and forwards to the CSV observer when one
/// is attached.
struct ProgressObserver<W: OutputWriter> {
    inner:         Option<SimOutputObserver<W>>,
    snapshot_rows: usize,
    summary_rows:  usize,
    deadlocks:     Vec<(Tick, Tick)>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: Option<SimOutputObserver<W>>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, deadlocks: Vec::new() }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        if let Some(inner) = &mut self.inner {
            self.summary_rows += 1;
            inner.on_tick_end(report);
        }
    }

    fn on_snapshot(&mut self, report: &TickReport) {
        if let Some(inner) = &mut self.inner {
            self.snapshot_rows += report.actors.len();
            inner.on_snapshot(report);
        }
    }

    fn on_deadlock(&mut self, tick: Tick, since: Tick) {
        self.deadlocks.push((tick, since));
        if let Some(inner) = &mut self.inner {
            inner.on_deadlock(tick, since);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if let Some(inner) = &mut self.inner {
            inner.on_sim_end(summary);
        }
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn run_single(config: SimConfig, output: Option<&Path>) -> Result<()> {
    println!(
        "Actors: {}  |  Strategy: {}  |  Ticks: {}  |  Seed: {}",
        config.actor_count, config.strategy, config.max_ticks, config.seed
    );
    println!(
        "hungry_chance = {}  full_chance = {}",
        config.hungry_chance, config.full_chance
    );
    println!();

    let mut sim = dp_sim::initialize(config)?;

    let csv = match output {
        Some(dir) => {
            info!(dir = %dir.display(), "writing csv output");
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output directory {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };
    let mut obs = ProgressObserver::new(csv);

    let t0 = Instant::now();
    let summary = sim.run_to_end(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.as_mut().and_then(SimOutputObserver::take_error) {
        warn!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = output {
        println!("  {}", dir.display());
        println!("  actor_snapshots.csv : {} rows", obs.snapshot_rows);
        println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    }
    for (tick, since) in &obs.deadlocks {
        println!("  deadlock detected at {tick} (stalled since {since})");
    }
    println!();

    print_summary(&summary);
    println!();

    println!("{:<8} {:<10} {:<6} {:<6} {:>6} {:>6}", "Actor", "State", "Left", "Right", "Wait", "Meals");
    println!("{}", "-".repeat(47));
    for actor in sim.table.actors() {
        let snap = sim.snapshot(actor.id);
        let wait = snap.wait_time.map(|w| w.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:<8} {:<10} {:<6} {:<6} {:>6} {:>6}",
            actor.id.0,
            snap.state.as_str(),
            if snap.holds_left { "yes" } else { "no" },
            if snap.holds_right { "yes" } else { "no" },
            wait,
            snap.completions,
        );
    }
    Ok(())
}

fn print_summary(s: &RunSummary) {
    println!("Ticks run          : {}", s.tick.0);
    println!("Meals completed    : {}", s.total_completions);
    println!("Average wait       : {:.3} ticks", s.avg_wait_time);
    println!("Longest wait       : {} ticks", s.longest_wait);
    println!("Throughput         : {:.4} meals/tick", s.throughput);
    println!("Completion variance: {:.3}", s.completion_variance);
}

fn run_compare(config: &SimConfig) -> Result<()> {
    println!(
        "Comparing strategies: {} actors, {} ticks, seed {}",
        config.actor_count, config.max_ticks, config.seed
    );
    println!();
    println!(
        "{:<12} {:>8} {:>10} {:>10} {:>12} {:>10}",
        "Strategy", "Meals", "Avg wait", "Max wait", "Throughput", "Variance"
    );
    println!("{}", "-".repeat(67));

    for (kind, result) in compare_strategies(config) {
        let s = result.with_context(|| format!("running {kind}"))?;
        println!(
            "{:<12} {:>8} {:>10.3} {:>10} {:>12.4} {:>10.3}",
            kind.as_str(),
            s.total_completions,
            s.avg_wait_time,
            s.longest_wait,
            s.throughput,
            s.completion_variance,
        );
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== dining: resource contention simulator ===");

    let config = args.sim_config()?;
    if args.compare {
        run_compare(&config)
    } else {
        run_single(config, args.output.as_deref())
    }
}
