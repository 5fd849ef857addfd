//! `boids-agent`: the boid itself.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`params`]     | `Params`, the per-tick tuning surface                   |
//! | [`boid`]       | `Boid` kinematics: `update`, `check_bounds`              |
//! | [`steering`]   | alignment, cohesion, separation, edge avoidance, `flock` |
//! | [`population`] | `PopulationBuilder` (seeded random placement)            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod boid;
pub mod params;
pub mod population;
pub mod steering;

#[cfg(test)]
mod tests;

pub use boid::Boid;
pub use params::{MIN_APPLIED_WEIGHT, Params};
pub use population::PopulationBuilder;
