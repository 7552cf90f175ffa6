//! Per-frame driver: integrate, then relax for a fixed number of sweeps.

use crate::config::SimConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::ClothGrid;
use crate::observer::{StepObserver, StepReport};

/// Drives a [`ClothGrid`] forward in time.
///
/// `step` is the raw fixed-size update. `advance` feeds wall-clock frame
/// time through an accumulator so the simulation always moves in
/// `config.time_step` increments regardless of frame rate.
#[derive(Clone, Debug)]
pub struct Stepper<F: Float> {
    config: SimConfig<F>,
    accumulator: F,
}

impl<F: Float> Stepper<F> {
    pub fn new(config: SimConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        Ok(Stepper { config, accumulator: F::zero() })
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }

    /// Integrate every particle once, then run exactly `config.iterations`
    /// sweeps over the active links in construction order.
    ///
    /// `dt == 0` is accepted and freezes motion; negative or non-finite
    /// values are rejected before anything is touched.
    pub fn step<O: StepObserver>(
        &self,
        grid: &mut ClothGrid<F>,
        dt: F,
        observer: &mut O,
    ) -> Result<StepReport, ClothError> {
        if !(dt.is_finite() && dt >= F::zero()) {
            return Err(ClothError::InvalidTimeStep);
        }

        grid.integrate(dt, &self.config);
        observer.on_integrate();

        let mut newly_broken = 0;
        for sweep in 0..self.config.iterations {
            newly_broken += grid.relax_sweep(self.config.break_ratio, observer);
            observer.on_relax_sweep(sweep);
        }

        let report = StepReport {
            newly_broken,
            active_links: grid.active_constraint_count(),
        };
        observer.on_step_complete(&report);
        Ok(report)
    }

    /// Bank `frame_dt` and run as many fixed steps as it covers, at most
    /// `config.max_steps_per_frame`. Time beyond the cap is dropped.
    /// Returns the number of steps taken.
    pub fn advance<O: StepObserver>(
        &mut self,
        grid: &mut ClothGrid<F>,
        frame_dt: F,
        observer: &mut O,
    ) -> Result<usize, ClothError> {
        if !(frame_dt.is_finite() && frame_dt >= F::zero()) {
            return Err(ClothError::InvalidTimeStep);
        }
        let dt = self.config.time_step;
        self.accumulator = self.accumulator + frame_dt;

        let mut steps = 0;
        while self.accumulator >= dt && steps < self.config.max_steps_per_frame {
            self.step(grid, dt, observer)?;
            self.accumulator = self.accumulator - dt;
            steps += 1;
        }
        if steps == self.config.max_steps_per_frame && self.accumulator >= dt {
            log::warn!("simulation falling behind, dropping {:?}s of backlog", self.accumulator);
            self.accumulator = F::zero();
        }
        Ok(steps)
    }

    /// Fraction of a fixed step left in the accumulator, for interpolation.
    pub fn alpha(&self) -> F {
        self.accumulator / self.config.time_step
    }
}
