//! Seeded construction of a random population.
//!
//! # Usage
//!
//! ```rust
//! use boids_agent::PopulationBuilder;
//!
//! let boids = PopulationBuilder::new(500, 800, 600, /*seed=*/ 42).build();
//! assert_eq!(boids.len(), 500);
//! assert!(boids.iter().all(|b| b.position.x <= 800.0 && b.position.y <= 600.0));
//! ```

use boids_core::SimRng;

use crate::Boid;

/// Stream offsets so positions and velocities come from independent RNGs.
const POSITION_STREAM: u64 = 1;
const VELOCITY_STREAM: u64 = 2;

/// Fluent builder for a `Vec<Boid>` placed uniformly inside the world.
pub struct PopulationBuilder {
    count:        usize,
    world_width:  u32,
    world_height: u32,
    seed:         u64,
}

impl PopulationBuilder {
    /// Create a builder for `count` boids in a `world_width × world_height`
    /// world, using `seed` for every random draw.
    pub fn new(count: usize, world_width: u32, world_height: u32, seed: u64) -> Self {
        Self { count, world_width, world_height, seed }
    }

    /// Draw positions uniformly from `[0, width] × [0, height]` and give each
    /// boid a random initial velocity (see [`Boid::new`]).
    ///
    /// The same builder inputs always produce the same population.
    pub fn build(self) -> Vec<Boid> {
        let mut root = SimRng::new(self.seed);
        let mut positions = root.child(POSITION_STREAM);
        let mut velocities = root.child(VELOCITY_STREAM);

        let width = self.world_width as f32;
        let height = self.world_height as f32;

        (0..self.count)
            .map(|_| {
                let x = positions.gen_range(0.0..=width);
                let y = positions.gen_range(0.0..=height);
                Boid::new(x, y, self.world_width, self.world_height, velocities.inner())
            })
            .collect()
    }
}
