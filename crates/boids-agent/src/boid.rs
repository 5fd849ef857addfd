//! Boid kinematic state and per-tick integration.

use boids_core::Vec2;
use rand::Rng;

use crate::Params;

/// Lower bound of the uniformly drawn initial speed.
pub const MIN_INITIAL_SPEED: f32 = 0.5;

/// Upper bound of the uniformly drawn initial speed.
pub const MAX_INITIAL_SPEED: f32 = 2.0;

/// One simulated agent.
///
/// Boids are owned by the simulation in a `Vec` that is never resized or
/// reordered during a run, so a boid's slot doubles as its `AgentId`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub position:     Vec2,
    pub velocity:     Vec2,
    /// Steering accumulated for the current tick.  Zero outside the window
    /// between `flock` and `update`.
    pub acceleration: Vec2,
    pub world_width:  u32,
    pub world_height: u32,
}

impl Boid {
    /// Place a boid at `(x, y)` heading in a random direction at a speed drawn
    /// uniformly from `[MIN_INITIAL_SPEED, MAX_INITIAL_SPEED]`.
    pub fn new<R: Rng + ?Sized>(
        x:            f32,
        y:            f32,
        world_width:  u32,
        world_height: u32,
        rng:          &mut R,
    ) -> Self {
        let speed = rng.gen_range(MIN_INITIAL_SPEED..=MAX_INITIAL_SPEED);
        let velocity = Vec2::random_unit(rng).with_magnitude(speed);
        Self::with_velocity(Vec2::new(x, y), velocity, world_width, world_height)
    }

    /// Place a boid with an explicit velocity and zero acceleration.
    pub fn with_velocity(position: Vec2, velocity: Vec2, world_width: u32, world_height: u32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            world_width,
            world_height,
        }
    }

    /// Advance one tick.
    ///
    /// Position moves by the *pre-steering* velocity, then steering is applied
    /// and speed is forced to exactly `max_speed`.  This is not an upper clamp:
    /// slow boids are sped up too, so after the first tick every boid moves at
    /// constant speed.  A zero velocity has no heading and stays zero.
    pub fn update(&mut self, params: &Params) {
        self.position += self.velocity;
        self.velocity += self.acceleration;
        self.velocity.set_magnitude(params.max_speed);
        self.acceleration = Vec2::ZERO;
    }

    /// Toroidal wrap: a coordinate that leaves `[0, extent]` reappears at the
    /// opposite edge.
    pub fn check_bounds(&mut self) {
        let width = self.world_width as f32;
        let height = self.world_height as f32;

        if self.position.x < 0.0 {
            self.position.x = width;
        } else if self.position.x > width {
            self.position.x = 0.0;
        }

        if self.position.y < 0.0 {
            self.position.y = height;
        } else if self.position.y > height {
            self.position.y = 0.0;
        }
    }

    /// Scale `force` down to `max_force` if it is longer; otherwise return it
    /// unchanged.  The final clamp of every steering behavior.
    #[inline]
    pub fn limit_force(force: Vec2, params: &Params) -> Vec2 {
        force.limit(params.max_force)
    }
}
