//! Fluent builder for constructing a [`Sim`].

use std::any::type_name;
use std::marker::PhantomData;

use boids_agent::{Boid, Params, PopulationBuilder};
use boids_core::Tick;
use boids_spatial::{Aabb, BruteForceIndex, NeighborIndex, QuadTree};
use tracing::info;

use crate::{Sim, SimConfig, SimError, SimResult};

/// A [`NeighborIndex`] the builder can construct from the run configuration.
pub trait WorldIndex: NeighborIndex + Sized {
    fn for_world(config: &SimConfig) -> SimResult<Self>;
}

impl WorldIndex for QuadTree {
    /// Root boundary covers the whole world, `[0, w] × [0, h]`.
    fn for_world(config: &SimConfig) -> SimResult<Self> {
        let boundary = Aabb::from_extent(config.world_width as f32, config.world_height as f32);
        Ok(QuadTree::new(boundary, config.quadtree_capacity)?)
    }
}

impl WorldIndex for BruteForceIndex {
    fn for_world(_config: &SimConfig) -> SimResult<Self> {
        Ok(BruteForceIndex::new())
    }
}

/// Fluent builder for [`Sim<I>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                          |
/// |---------------------|--------------------------------------------------|
/// | `.params(p)`        | `Params::default()`                              |
/// | `.boids(v)`         | `PopulationBuilder` seeded from `config.seed`    |
/// | `.index::<J>()`     | `QuadTree` with `config.quadtree_capacity`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .params(params)
///     .index::<BruteForceIndex>()
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<I = QuadTree> {
    config: SimConfig,
    params: Params,
    boids:  Option<Vec<Boid>>,
    index:  PhantomData<I>,
}

impl SimBuilder<QuadTree> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            params: Params::default(),
            boids:  None,
            index:  PhantomData,
        }
    }
}

impl<I: WorldIndex> SimBuilder<I> {
    /// Parameters used by [`Sim::run`] and [`Sim::run_ticks`].
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Supply hand-placed boids instead of a seeded random population.
    ///
    /// Must be length `config.population`, and every boid must live in the
    /// configured world extent.  Slot `i` becomes `AgentId(i)`.
    pub fn boids(mut self, boids: Vec<Boid>) -> Self {
        self.boids = Some(boids);
        self
    }

    /// Switch the neighborhood index implementation.
    pub fn index<J: WorldIndex>(self) -> SimBuilder<J> {
        SimBuilder {
            config: self.config,
            params: self.params,
            boids:  self.boids,
            index:  PhantomData,
        }
    }

    /// Validate inputs, place the population, and return a ready-to-run
    /// [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim<I>> {
        self.config.validate()?;
        self.params.validate()?;

        let population = self.config.population;
        let boids = match self.boids {
            Some(boids) => {
                if boids.len() != population {
                    return Err(SimError::AgentCountMismatch {
                        expected: population,
                        got:      boids.len(),
                        what:     "boids",
                    });
                }
                let (width, height) = (self.config.world_width, self.config.world_height);
                if let Some(i) = boids
                    .iter()
                    .position(|b| b.world_width != width || b.world_height != height)
                {
                    return Err(SimError::Config(format!(
                        "boid {i} wraps at {}x{}, world is {width}x{height}",
                        boids[i].world_width, boids[i].world_height,
                    )));
                }
                boids
            }
            None => PopulationBuilder::new(
                population,
                self.config.world_width,
                self.config.world_height,
                self.config.seed,
            )
            .build(),
        };

        let index = I::for_world(&self.config)?;

        info!(
            population,
            world_width = self.config.world_width,
            world_height = self.config.world_height,
            seed = self.config.seed,
            index = type_name::<I>(),
            "simulation built",
        );

        Ok(Sim {
            config:       self.config,
            params:       self.params,
            current_tick: Tick::ZERO,
            snapshot:     Vec::with_capacity(population),
            forces:       Vec::with_capacity(population),
            boids,
            index,
        })
    }
}
