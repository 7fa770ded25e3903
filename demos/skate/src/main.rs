//! skate — the reference run for the rink collision-learning simulation.
//!
//! Twenty agents skate around a 1600 × 1600 torus, each picking one of six
//! headings per iteration and learning which ones keep it clear of the
//! others.  Over time the population tends to settle on a shared heading.
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` for one line per
//! iteration or `RUST_LOG=rink_learning=trace` to see every snapshot.

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rink_core::RinkConfig;
use rink_metrics::RunReport;
use rink_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const PROGRESS_INTERVAL: u64 = 10_000; // log every N iterations

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    interval:   u64,
    collisions: u64,
}

impl Progress {
    fn new(interval: u64) -> Self {
        Self { interval, collisions: 0 }
    }
}

impl SimObserver for Progress {
    fn on_iteration_end(&mut self, iteration: u64, collisions: u32) {
        self.collisions += collisions as u64;
        let done = iteration + 1;
        if done % self.interval == 0 {
            tracing::info!(iterations = done, collisions = self.collisions, "progress");
            self.collisions = 0;
        }
    }

    fn on_sim_end(&mut self, iterations: u64) {
        tracing::info!(iterations, "simulation finished");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Config.
    let config = RinkConfig { seed: SEED, ..RinkConfig::default() };
    config.validate()?;

    println!("=== skate — rink collision learning ===");
    println!(
        "Agents: {}  |  Headings: {}  |  Iterations: {}  |  Seed: {}",
        config.agent_count, config.choice_count, config.max_iterations, config.seed
    );
    println!(
        "Torus: {} × {}  |  Radius: {}  |  Step: {}  |  ε: {}",
        config.width, config.height, config.collision_radius, config.step_size, config.exploration
    );
    println!();

    // 2. Build sim (random placement from the seed).
    let mut sim = SimBuilder::new(config).build()?;

    // 3. Run.
    let mut obs = Progress::new(PROGRESS_INTERVAL);
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    let report = RunReport::from_sim(&sim);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  total collisions : {} of {} moves",
        report.total_collisions(),
        report.choices.iter().sum::<u64>()
    );
    if let Some(peak) = report.metrics.final_peak_population() {
        println!("  final peak       : {peak} agents on one heading");
    }
    println!();

    // 5. Per-heading table.
    let final_avg = report.average_propensities.last();
    println!(
        "{:<8} {:>8} {:>12} {:>12} {:>12}",
        "Heading", "Degrees", "Chosen", "Collisions", "Avg prop."
    );
    println!("{}", "-".repeat(56));
    for (c, degrees) in report.headings_degrees.iter().enumerate() {
        let avg = final_avg.map_or(0.0, |row| row[c]);
        println!(
            "{:<8} {:>8.1} {:>12} {:>12} {:>12.4}",
            c,
            degrees,
            report.choices[c],
            report.collisions[c],
            avg,
        );
    }

    Ok(())
}
