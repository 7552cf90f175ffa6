//! Tearable Verlet cloth.
//!
//! `tatter` simulates a hanging sheet of point masses joined by distance
//! links. Each step integrates every particle with Verlet integration, then
//! relaxes the links for a fixed number of position-based sweeps. Links
//! stretched past a break ratio tear for good, and the host can cut links
//! under the pointer.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, horizontal friction, viewport clamp
//! - **Breaking links**: over-stretched links tear permanently
//! - **Stable handles**: links keep their [`ConstraintId`] after tearing or removal
//! - **Picking**: bounding-box hit test for pointer-driven cutting
//! - **Fixed timestep**: [`Stepper::advance`] decouples frame rate from simulation rate
//! - **Observable**: monitor steps via the [`StepObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tatter::{ClothGrid, GridConfig, NoOpStepObserver, SimConfig, Stepper, Vec2};
//!
//! let sim: SimConfig<f32> = SimConfig::new();
//! let mut grid = ClothGrid::build(&GridConfig::new(4, 5), sim.gravity)?;
//! let stepper = Stepper::new(sim)?;
//! stepper.step(&mut grid, 0.016, &mut NoOpStepObserver)?;
//! grid.remove_at(Vec2::new(5.0, 30.0));
//! assert_eq!(grid.segments().count(), grid.active_constraint_count());
//! # Ok::<(), tatter::ClothError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod grid;
pub mod stepper;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Aabb, Vec2};
pub use particle::Particle;
pub use constraint::{Constraint, ConstraintId, LinkState, Relaxation};
pub use grid::{ClothGrid, LinkAxis, PointView, Segment};
pub use stepper::Stepper;
pub use config::{GridConfig, SimConfig};
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver, StepReport};
pub use error::ClothError;
