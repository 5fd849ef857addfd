//! Run-level configuration.

use boids_core::Tick;
use boids_spatial::DEFAULT_CAPACITY;

use crate::{SimError, SimResult};

/// Top-level simulation configuration.
///
/// Fixed for the lifetime of a [`Sim`](crate::Sim).  Per-tick tuning lives in
/// [`boids_agent::Params`] instead, so a host can change steering weights
/// without rebuilding the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SimConfig {
    /// World extent along x.  Boids live in `[0, world_width]`.
    pub world_width: u32,

    /// World extent along y.
    pub world_height: u32,

    /// Number of boids.  Fixed for the run; zero is allowed.
    pub population: usize,

    /// Master RNG seed for initial placement.  The tick itself is
    /// deterministic, so the same seed always reproduces the same run.
    pub seed: u64,

    /// Ticks executed by [`Sim::run`](crate::Sim::run).
    pub total_ticks: u64,

    /// Points a quadtree node holds before it subdivides.
    pub quadtree_capacity: usize,

    /// Fire `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width:           1000,
            world_height:          600,
            population:            100,
            seed:                  42,
            total_ticks:           1000,
            quadtree_capacity:     DEFAULT_CAPACITY,
            output_interval_ticks: 10,
        }
    }
}

impl SimConfig {
    /// The tick at which [`Sim::run`](crate::Sim::run) stops (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(SimError::Config(format!(
                "world must have a positive extent, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.quadtree_capacity == 0 {
            return Err(SimError::Config("quadtree_capacity must be at least 1".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(SimError::Config(format!(
                "population {} exceeds the AgentId range",
                self.population
            )));
        }
        Ok(())
    }
}
