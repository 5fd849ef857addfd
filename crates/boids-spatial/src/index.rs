//! The `NeighborIndex` trait, the seam between the tick loop and whatever
//! structure answers "who is near this point".

use boids_core::{AgentId, Vec2};

use crate::{Circle, QuadTree};

/// Common behaviour exposed by neighborhood indices.
///
/// The simulation calls [`rebuild`](Self::rebuild) once per tick with every
/// agent's current position (slot `i` belongs to `AgentId(i)`), then calls
/// [`neighbors_within`](Self::neighbors_within) once per agent.  No query is
/// issued while a rebuild is in progress, so implementations need no interior
/// synchronisation; `Sync` is required only so queries may run on Rayon.
pub trait NeighborIndex: Send + Sync {
    /// Discard all state and index `positions`.  Returns how many positions
    /// were rejected (e.g. outside the index boundary).
    fn rebuild(&mut self, positions: &[Vec2]) -> usize;

    /// Append to `out` every indexed id within `radius` (inclusive) of
    /// `center`.  `out` is not cleared first.
    fn neighbors_within(&self, center: Vec2, radius: f32, out: &mut Vec<AgentId>);
}

impl NeighborIndex for QuadTree {
    fn rebuild(&mut self, positions: &[Vec2]) -> usize {
        self.clear();
        positions
            .iter()
            .enumerate()
            .filter(|&(i, &p)| !self.insert(AgentId(i as u32), p))
            .count()
    }

    fn neighbors_within(&self, center: Vec2, radius: f32, out: &mut Vec<AgentId>) {
        self.query_into(&Circle::around(center, radius), out);
    }
}

/// O(N) linear-scan index.
///
/// Accepts every position (nothing is ever rejected).  Serves as the
/// reference that quadtree results are checked against, and as a baseline
/// for benchmarking small populations where tree overhead dominates.
#[derive(Clone, Debug, Default)]
pub struct BruteForceIndex {
    positions: Vec<Vec2>,
}

impl BruteForceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl NeighborIndex for BruteForceIndex {
    fn rebuild(&mut self, positions: &[Vec2]) -> usize {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
        0
    }

    fn neighbors_within(&self, center: Vec2, radius: f32, out: &mut Vec<AgentId>) {
        let range = Circle::around(center, radius);
        out.extend(
            self.positions
                .iter()
                .enumerate()
                .filter(|&(_, &p)| range.contains(p))
                .map(|(i, _)| AgentId(i as u32)),
        );
    }
}
