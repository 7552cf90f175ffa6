//! Distance links ("ropes") between two particles, solved by direct
//! positional correction.

use crate::float::Float;
use crate::particle::Particle;

/// Stable handle to a link: its position in construction order.
///
/// Handles are never reused. Removing a link leaves its slot in place
/// with [`LinkState::Removed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub usize);

impl ConstraintId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ConstraintId {
    fn from(val: usize) -> Self {
        Self(val)
    }
}

/// Lifecycle of a link. Both terminal states are permanent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkState {
    #[default]
    Active,
    /// Torn by over-stretch during relaxation.
    Broken,
    /// Deleted on request from the presentation side.
    Removed,
}

impl LinkState {
    pub fn is_active(self) -> bool {
        self == LinkState::Active
    }
}

/// What a single [`Constraint::relax`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Endpoints were moved back to rest length.
    Corrected,
    /// Strain crossed the break ratio; nothing moved.
    Broke,
    /// Link was not active; nothing happened.
    Skipped,
}

/// A link between particles `a` and `b` with a fixed rest length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    state: LinkState,
}

impl<F: Float> Constraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Constraint { a, b, rest_length, state: LinkState::Active }
    }

    /// Link two particles at their current distance.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Constraint::new(a, b, rest_length)
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Current length divided by rest length.
    pub fn strain(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos) / self.rest_length
    }

    /// Mark as removed. Returns `false` if the link was not active.
    pub(crate) fn remove(&mut self) -> bool {
        if self.state.is_active() {
            self.state = LinkState::Removed;
            true
        } else {
            false
        }
    }

    /// Pull both endpoints symmetrically about their midpoint so they sit
    /// `rest_length` apart, or break if stretched to `break_ratio` or beyond.
    ///
    /// Locked endpoints are never written. Coincident endpoints have no
    /// direction and collapse onto the midpoint for this pass.
    pub fn relax(&mut self, particles: &mut [Particle<F>], break_ratio: F) -> Relaxation {
        if !self.state.is_active() {
            return Relaxation::Skipped;
        }
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;
        let delta = a_pos - b_pos;
        let dist = delta.length();

        if dist / self.rest_length >= break_ratio {
            self.state = LinkState::Broken;
            return Relaxation::Broke;
        }

        let center = a_pos.midpoint(b_pos);
        let offset = delta.normalize().scale(self.rest_length * F::half());

        if !particles[self.a].locked {
            particles[self.a].pos = center + offset;
        }
        if !particles[self.b].locked {
            particles[self.b].pos = center - offset;
        }
        Relaxation::Corrected
    }
}
