//! Error types for cloth construction and caller-supplied handles.
//!
//! Physical edge cases (degenerate links, over-stretch, out-of-bounds
//! positions) are resolved inside the solver and never show up here.

use thiserror::Error;

/// Errors returned by configuration, construction, and removal calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClothError {
    /// Grid must have at least one row and one column.
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Lattice spacing must be finite and positive on both axes.
    #[error("grid spacing must be finite and positive")]
    InvalidSpacing,
    /// Time step must be finite and non-negative.
    #[error("time step must be finite and non-negative")]
    InvalidTimeStep,
    /// A simulation parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// Constraint handle does not exist in this grid.
    #[error("constraint {index} out of bounds (count: {count})")]
    ConstraintOutOfBounds { index: usize, count: usize },
    /// Constraint has already been broken or removed.
    #[error("constraint {index} is no longer active")]
    ConstraintInactive { index: usize },
    /// Particle index does not exist in this grid.
    #[error("particle {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}
