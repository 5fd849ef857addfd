//! Simulation observer trait for progress reporting and data collection.

use boids_agent::Boid;
use boids_core::Tick;

use crate::TickStats;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.is_multiple_of(self.interval) {
///             println!("{}: mean speed {:.2}", stats.tick, stats.mean_speed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the index is rebuilt.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every boid's acceleration holds this tick's steering and
    /// before any boid has been integrated.  The only point at which
    /// accelerations are non-zero.
    fn on_forces(&mut self, _tick: Tick, _boids: &[Boid]) {}

    /// Called after the commit phase.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called after `on_tick_end` on ticks that are a multiple of
    /// `config.output_interval_ticks`, with the post-tick state.
    fn on_snapshot(&mut self, _tick: Tick, _boids: &[Boid]) {}

    /// Called once by [`Sim::run`][crate::Sim::run] after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
