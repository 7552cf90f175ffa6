//! Step observer hooks for monitoring the simulation.

use crate::constraint::ConstraintId;

/// Summary of one [`Stepper::step`](crate::stepper::Stepper::step).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Links that broke from over-stretch during this step.
    pub newly_broken: usize,
    /// Links still taking part in relaxation after the step.
    pub active_links: usize,
}

/// Trait for observing physics simulation steps.
///
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every particle has been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each full relaxation sweep.
    fn on_relax_sweep(&mut self, _sweep: usize) {}

    /// Called the moment a link tears from over-stretch.
    fn on_link_broken(&mut self, _id: ConstraintId) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self, _report: &StepReport) {}
}

/// Observer that ignores every hook.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that forwards hooks to the `log` facade.
///
/// Sweeps go to `trace`, tears and step summaries to `debug`.
#[derive(Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for LogStepObserver {
    fn on_relax_sweep(&mut self, sweep: usize) {
        log::trace!("step {}: relax sweep {} done", self.steps, sweep);
    }

    fn on_link_broken(&mut self, id: ConstraintId) {
        log::debug!("step {}: link {} tore", self.steps, id.index());
    }

    fn on_step_complete(&mut self, report: &StepReport) {
        log::debug!(
            "step {} complete: {} broke, {} links active",
            self.steps,
            report.newly_broken,
            report.active_links
        );
        self.steps += 1;
    }
}
