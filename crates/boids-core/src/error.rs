//! Core error type.
//!
//! Vector math is the only fallible part of `boids-core`.  Sub-crates wrap
//! `CoreError` in their own enums via `#[from]` so a zero-vector failure deep
//! inside a steering computation surfaces unchanged at the tick boundary.

use thiserror::Error;

/// Errors produced by `boids-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A vector was divided by a scalar that is exactly zero.
    #[error("division of vector by zero")]
    DivisionByZero,

    /// A direction was requested from a vector whose magnitude is exactly zero.
    #[error("cannot normalize a zero-magnitude vector")]
    ZeroVector,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `boids-*` crates built on `boids-core`.
pub type CoreResult<T> = Result<T, CoreError>;
