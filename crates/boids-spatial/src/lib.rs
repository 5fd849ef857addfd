//! `boids-spatial`: bounding geometry and neighbor indexing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`geom`]     | `Aabb`, `Circle`, `Region` (range shapes for queries)   |
//! | [`quadtree`] | `QuadTree` (lazy, non-relocating point quadtree)        |
//! | [`index`]    | `NeighborIndex` trait, `BruteForceIndex` reference impl |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod geom;
pub mod index;
pub mod quadtree;


pub use error::{SpatialError, SpatialResult};
pub use geom::{Aabb, Circle, Region};
pub use index::{BruteForceIndex, NeighborIndex};
pub use quadtree::{DEFAULT_CAPACITY, Entry, MAX_DEPTH, QuadTree};
