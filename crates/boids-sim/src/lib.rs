//! `boids-sim`: tick orchestrator for the boids flocking simulation.
//!
//! # Tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Rebuild:  clear the NeighborIndex, insert every boid's position.
//!   ② Compute:  per boid: neighbors within max_distance → steering
//!                (read-only; parallel with the `parallel` feature).
//!                Accelerations are stored, then on_forces fires.
//!   ③ Commit:   per boid: update (integrate, force speed to max_speed)
//!                then check_bounds (toroidal wrap).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs phases ② and ③ on Rayon's thread pool.              |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `SimConfig` et al.  |
//!
//! # Quick-start
//!
//! ```rust,no_run
//! use boids_agent::Params;
//! use boids_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let config = SimConfig { population: 500, total_ticks: 100, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).params(Params::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//!
//! let mut positions = vec![0.0_f32; 2 * sim.boids().len()];
//! sim.write_positions(&mut positions)?;
//! # Ok::<(), boids_sim::SimError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::{SimBuilder, WorldIndex};
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::TickStats;
