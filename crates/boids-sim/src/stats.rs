use boids_core::Tick;

/// Summary of one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    pub tick: Tick,

    /// Index hits within `max_distance`, summed over all boids, excluding
    /// each boid's hit on itself.  Every close pair is counted from both
    /// sides.
    pub neighbor_pairs: usize,

    /// Positions the index refused during the rebuild (outside its boundary).
    pub rejected_inserts: usize,

    /// Mean velocity magnitude after the commit phase.  0 for an empty world.
    pub mean_speed: f32,
}
