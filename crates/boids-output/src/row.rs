//! Plain data row types written by output backends.

use boids_agent::Boid;
use boids_core::Tick;
use boids_sim::TickStats;

/// One boid's kinematic state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
}

impl AgentSnapshotRow {
    pub fn from_boid(tick: Tick, agent_id: u32, boid: &Boid) -> Self {
        Self {
            tick: tick.0,
            agent_id,
            x:  boid.position.x,
            y:  boid.position.y,
            vx: boid.velocity.x,
            vy: boid.velocity.y,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub neighbor_pairs:   u64,
    pub rejected_inserts: u64,
    pub mean_speed:       f32,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(stats: &TickStats) -> Self {
        Self {
            tick:             stats.tick.0,
            neighbor_pairs:   stats.neighbor_pairs as u64,
            rejected_inserts: stats.rejected_inserts as u64,
            mean_speed:       stats.mean_speed,
        }
    }
}
