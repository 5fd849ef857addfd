//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `boids-spatial`.
///
/// Only index construction can fail.  Inserting a point outside the index
/// boundary is not an error: [`QuadTree::insert`][crate::QuadTree::insert]
/// reports it by returning `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    #[error("quadtree node capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("index boundary must have finite, non-negative extents, got {width} x {height}")]
    InvalidBoundary { width: f32, height: f32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
