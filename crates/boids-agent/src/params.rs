//! Simulation tuning parameters.

use boids_core::{CoreError, CoreResult};

/// Behavior weights below this are treated as disabled: the behavior's force
/// is not computed at all.
pub const MIN_APPLIED_WEIGHT: f32 = 0.01;

/// The tuning surface of the whole simulation.
///
/// Immutable for the duration of a tick and handed to every boid call.  A host
/// may swap in a new `Params` between ticks (e.g. from UI sliders).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Params {
    /// Weight of the match-neighbor-heading force.
    pub alignment_weight: f32,

    /// Weight of the move-toward-neighbor-center force.
    pub cohesion_weight: f32,

    /// Weight of the avoid-crowding force.
    pub separation_weight: f32,

    /// Weight of the steer-away-from-world-edges force.  The default of `0.0`
    /// leaves edge avoidance off, so agents simply wrap at the edges.
    pub edge_avoidance_weight: f32,

    /// Every agent's speed after each integration step.
    pub max_speed: f32,

    /// Perception radius for neighbor queries and behaviors.
    pub max_distance: f32,

    /// Distance from a world edge at which edge avoidance starts to push.
    pub max_edge_distance: f32,

    /// Upper bound on the magnitude of each individual steering force.
    pub max_force: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alignment_weight:      1.0,
            cohesion_weight:       1.0,
            separation_weight:     1.0,
            edge_avoidance_weight: 0.0,
            max_speed:             4.0,
            max_distance:          200.0,
            max_edge_distance:     20.0,
            max_force:             1.0,
        }
    }
}

impl Params {
    /// `true` if a behavior with this weight contributes to steering.
    #[inline]
    pub fn applies(weight: f32) -> bool {
        weight >= MIN_APPLIED_WEIGHT
    }

    /// Reject negative or non-finite values.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("separation_weight", self.separation_weight),
            ("edge_avoidance_weight", self.edge_avoidance_weight),
            ("max_speed", self.max_speed),
            ("max_distance", self.max_distance),
            ("max_edge_distance", self.max_edge_distance),
            ("max_force", self.max_force),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
