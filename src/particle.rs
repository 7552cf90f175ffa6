//! Verlet point masses.

use crate::config::SimConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// A point mass with implicit velocity `pos - prev_pos`.
///
/// Locked particles anchor the cloth: neither integration nor relaxation
/// ever writes to their positions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub locked: bool,
}

impl<F: Float> Particle<F> {
    /// A resting particle at `pos` carrying `acceleration`.
    pub fn new(pos: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration,
            locked: false,
        }
    }

    pub fn locked(pos: Vec2<F>) -> Self {
        Particle {
            locked: true,
            ..Particle::new(pos, Vec2::zero())
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
        self.prev_pos = self.pos;
    }

    pub fn accelerate(&mut self, accel: Vec2<F>) {
        if !self.locked {
            self.acceleration = self.acceleration + accel;
        }
    }

    /// Advance one Verlet step, then apply friction and the viewport clamp.
    pub fn integrate(&mut self, dt: F, config: &SimConfig<F>) {
        if self.locked {
            return;
        }
        let new_pos = self.pos.scale(F::two()) - self.prev_pos + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.apply_friction(config.friction, config.friction_epsilon);
        self.clamp_to_viewport(config.viewport_width);
    }

    /// Decay the horizontal push. Gravity on the vertical axis is left alone.
    pub fn apply_friction(&mut self, coefficient: F, epsilon: F) {
        self.acceleration.x = self.acceleration.x * coefficient;
        if self.acceleration.x.abs() <= epsilon {
            self.acceleration.x = F::zero();
        }
    }

    /// Keep within `[0, width]` horizontally and below the top edge.
    /// There is no floor: the cloth may fall out of view.
    pub fn clamp_to_viewport(&mut self, width: F) {
        self.pos.x = self.pos.x.max(F::zero()).min(width);
        self.pos.y = self.pos.y.max(F::zero());
    }

    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
