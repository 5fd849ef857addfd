//! flock: headless run of the boids simulation.
//!
//! ```text
//! flock [CONFIG.json] [OUTPUT_DIR]
//! RUST_LOG=info flock demos/flock/flock.json output/flock
//! ```
//!
//! `CONFIG.json` holds `{ "sim": SimConfig, "params": Params }`; either key
//! (or the whole file) may be omitted to use defaults.  With `OUTPUT_DIR`,
//! boid snapshots and per-tick summaries are written there as CSV.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use boids_agent::{Boid, Params};
use boids_core::Tick;
use boids_output::{CsvWriter, SimOutputObserver};
use boids_sim::{SimBuilder, SimConfig, SimObserver, TickStats};

/// Log a progress line every this many ticks.
const PROGRESS_INTERVAL_TICKS: u64 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RunFile {
    sim:    SimConfig,
    params: Params,
}

fn load_run_file(path: Option<&Path>) -> Result<RunFile> {
    let Some(path) = path else {
        return Ok(RunFile::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs progress and forwards to the CSV observer when output is enabled.
struct FlockObserver {
    output:     Option<SimOutputObserver<CsvWriter>>,
    last:       Option<TickStats>,
    pair_total: u64,
}

impl SimObserver for FlockObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_tick_start(tick);
        }
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.pair_total += stats.neighbor_pairs as u64;
        if stats.tick.is_multiple_of(PROGRESS_INTERVAL_TICKS) {
            info!(
                tick = stats.tick.0,
                neighbor_pairs = stats.neighbor_pairs,
                mean_speed = stats.mean_speed,
                "progress",
            );
        }
        self.last = Some(*stats);
        if let Some(out) = &mut self.output {
            out.on_tick_end(stats);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid]) {
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, boids);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from);

    // 1. Configuration.
    let run = load_run_file(config_path.as_deref())?;
    println!("=== flock: boids simulation ===");
    println!(
        "World: {}x{}  |  Boids: {}  |  Ticks: {}  |  Seed: {}",
        run.sim.world_width,
        run.sim.world_height,
        run.sim.population,
        run.sim.total_ticks,
        run.sim.seed,
    );

    // 2. Build sim.
    let mut sim = SimBuilder::new(run.sim).params(run.params).build()?;

    // 3. Output.
    let output = match &output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };
    let mut obs = FlockObserver { output, last: None, pair_total: 0 };

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.as_mut().and_then(SimOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let ticks = sim.current_tick().0.max(1);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  mean neighbors per tick : {:.1}", obs.pair_total as f64 / ticks as f64);
    if let Some(last) = obs.last {
        println!("  final mean speed        : {:.3}", last.mean_speed);
    }
    if let Some(dir) = &output_dir {
        println!("  output                  : {}", dir.display());
    }
    println!();

    // 6. First few boids.
    println!("{:<6} {:>10} {:>10} {:>8} {:>8}", "Boid", "x", "y", "vx", "vy");
    println!("{}", "-".repeat(46));
    for (i, b) in sim.boids().iter().take(8).enumerate() {
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>8.3} {:>8.3}",
            i, b.position.x, b.position.y, b.velocity.x, b.velocity.y,
        );
    }

    Ok(())
}
