//! `boids-core`: foundational types for the boids flocking simulation.
//!
//! This crate is a dependency of every other `boids-*` crate.  It has no
//! `boids-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`vector`]  | `Vec2` arithmetic, normalization, random headings |
//! | [`ids`]     | `AgentId`                                         |
//! | [`time`]    | `Tick`                                            |
//! | [`rng`]     | `SimRng` (seeded, reproducible)                   |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Tick;
pub use vector::Vec2;
