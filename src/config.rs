//! Simulation and lattice configuration.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

/// Parameters for integration and constraint relaxation.
///
/// # Builder Pattern
/// ```
/// use tatter::config::SimConfig;
/// use tatter::vec::Vec2;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_iterations(10)
///     .with_gravity(Vec2::new(0.0, 3.0))
///     .with_friction(0.05)
///     .with_viewport_width(800.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig<F: Float> {
    /// Relaxation sweeps per step. No convergence test, every sweep runs. Default: 10.
    pub iterations: usize,
    /// Strain ratio (current / rest length) at which a link breaks. Default: 1.03.
    pub break_ratio: F,
    /// Multiplier applied to horizontal acceleration after each integration.
    /// 1.0 disables friction. Default: 0.05.
    pub friction: F,
    /// Horizontal acceleration at or below this magnitude snaps to zero. Default: 0.01.
    pub friction_epsilon: F,
    /// Particles are clamped into `[0, viewport_width]` horizontally. Default: 800.
    pub viewport_width: F,
    /// Acceleration every particle starts with. Default: (0, 3), +y is down.
    pub gravity: Vec2<F>,
    /// Step length used by the fixed-timestep accumulator. Default: 0.016.
    pub time_step: F,
    /// Upper bound on accumulator steps per rendered frame. Default: 5.
    pub max_steps_per_frame: usize,
}

impl<F: Float> SimConfig<F> {
    pub fn new() -> Self {
        SimConfig {
            iterations: 10,
            break_ratio: F::from_f32(1.03),
            friction: F::from_f32(0.05),
            friction_epsilon: F::from_f32(0.01),
            viewport_width: F::from_f32(800.0),
            gravity: Vec2::new(F::zero(), F::from_f32(3.0)),
            time_step: F::from_f32(0.016),
            max_steps_per_frame: 5,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_break_ratio(mut self, ratio: F) -> Self {
        self.break_ratio = ratio;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_friction_epsilon(mut self, epsilon: F) -> Self {
        self.friction_epsilon = epsilon;
        self
    }

    pub fn with_viewport_width(mut self, width: F) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, dt: F) -> Self {
        self.time_step = dt;
        self
    }

    pub fn with_max_steps_per_frame(mut self, steps: usize) -> Self {
        self.max_steps_per_frame = steps;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        let err = if self.iterations == 0 {
            Some("iterations must be at least 1")
        } else if !(self.break_ratio.is_finite() && self.break_ratio > F::one()) {
            Some("break ratio must be finite and greater than 1")
        } else if !(self.friction >= F::zero() && self.friction <= F::one()) {
            Some("friction must be in [0, 1]")
        } else if !(self.friction_epsilon.is_finite() && self.friction_epsilon >= F::zero()) {
            Some("friction epsilon must be finite and non-negative")
        } else if !(self.viewport_width.is_finite() && self.viewport_width > F::zero()) {
            Some("viewport width must be finite and positive")
        } else if !self.gravity.is_finite() {
            Some("gravity must be finite")
        } else if !(self.time_step.is_finite() && self.time_step > F::zero()) {
            Some("time step must be finite and positive")
        } else if self.max_steps_per_frame == 0 {
            Some("max steps per frame must be at least 1")
        } else {
            None
        };
        match err {
            Some(msg) => {
                log::warn!("rejecting simulation config: {}", msg);
                Err(ClothError::InvalidConfig(msg))
            }
            None => Ok(()),
        }
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lattice layout for [`ClothGrid::build`](crate::grid::ClothGrid::build).
///
/// Particle `(col, row)` sits at
/// `origin + (col * spacing.x + stagger, row * spacing.y)`, where the stagger
/// is skipped on the final row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    pub origin: Vec2<F>,
    pub spacing: Vec2<F>,
    pub stagger: F,
}

impl<F: Float> GridConfig<F> {
    pub fn new(rows: usize, cols: usize) -> Self {
        GridConfig {
            rows,
            cols,
            origin: Vec2::zero(),
            spacing: Vec2::new(F::from_f32(10.0), F::from_f32(10.0)),
            stagger: F::zero(),
        }
    }

    /// The 50 x 70 curtain hung at (50, 50) with 10 px spacing.
    pub fn reference() -> Self {
        GridConfig::new(50, 70)
            .with_origin(Vec2::new(F::from_f32(50.0), F::from_f32(50.0)))
            .with_stagger(F::from_f32(5.0))
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: Vec2<F>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stagger(mut self, stagger: F) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if self.rows == 0 || self.cols == 0 {
            log::warn!("rejecting {}x{} grid", self.rows, self.cols);
            return Err(ClothError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        let s = self.spacing;
        if !(s.is_finite() && s.x > F::zero() && s.y > F::zero()) {
            log::warn!("rejecting grid spacing {:?}", s);
            return Err(ClothError::InvalidSpacing);
        }
        if !(self.origin.is_finite() && self.stagger.is_finite()) {
            return Err(ClothError::InvalidConfig("grid origin and stagger must be finite"));
        }
        Ok(())
    }
}
