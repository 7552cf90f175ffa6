//! Tearable cloth lattice: particles joined to their left and upper
//! neighbours, with the top row locked in place.

use crate::config::{GridConfig, SimConfig};
use crate::constraint::{Constraint, ConstraintId, LinkState, Relaxation};
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::{Aabb, Vec2};
use alloc::vec::Vec as AllocVec;

/// Orientation of a lattice link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkAxis {
    Horizontal,
    Vertical,
}

/// Read-only view of one particle for drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointView<F: Float> {
    pub pos: Vec2<F>,
    pub locked: bool,
}

/// Read-only view of one active link for drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub id: ConstraintId,
    pub start: Vec2<F>,
    pub end: Vec2<F>,
}

/// A `rows x cols` cloth built from Verlet particles and distance links.
///
/// Particle at (col, row) has index `row * cols + col`. Links are stored in
/// construction order and keep their slot for the lifetime of the grid, so a
/// [`ConstraintId`] stays valid after tearing or removal.
#[derive(Clone, Debug)]
pub struct ClothGrid<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    rows: usize,
    cols: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Lay out the lattice row by row.
    ///
    /// Each particle starts at rest carrying `gravity`. Walking row-major, a
    /// particle is linked first to its left neighbour, then to the one above.
    /// Row 0 is locked.
    pub fn build(config: &GridConfig<F>, gravity: Vec2<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let (rows, cols) = (config.rows, config.cols);
        let mut particles = AllocVec::with_capacity(rows * cols);
        let mut constraints =
            AllocVec::with_capacity((rows * cols * 2).saturating_sub(rows + cols));

        for row in 0..rows {
            let stagger = if row + 1 == rows { F::zero() } else { config.stagger };
            for col in 0..cols {
                let x = config.origin.x + F::from_usize(col) * config.spacing.x + stagger;
                let y = config.origin.y + F::from_usize(row) * config.spacing.y;
                let mut particle = Particle::new(Vec2::new(x, y), gravity);
                if row == 0 {
                    particle.lock();
                }
                particles.push(particle);

                let idx = row * cols + col;
                if col != 0 {
                    constraints.push(Constraint::from_particles(idx - 1, idx, &particles));
                }
                if row != 0 {
                    constraints.push(Constraint::from_particles(idx - cols, idx, &particles));
                }
            }
        }

        log::debug!(
            "built {}x{} cloth: {} particles, {} links",
            rows,
            cols,
            particles.len(),
            constraints.len()
        );
        Ok(ClothGrid { particles, constraints, rows, cols })
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// Anchor an extra particle in place.
    pub fn lock_particle(&mut self, index: usize) -> Result<(), ClothError> {
        let count = self.particles.len();
        let p = self
            .particles
            .get_mut(index)
            .ok_or(ClothError::ParticleOutOfBounds { index, count })?;
        p.lock();
        Ok(())
    }

    /// Add an acceleration to every unlocked particle. Friction bleeds off
    /// the horizontal part over the following steps.
    pub fn push(&mut self, accel: Vec2<F>) {
        for p in self.particles.iter_mut() {
            p.accelerate(accel);
        }
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint<F>> {
        self.constraints.get(id.index())
    }

    /// Every link ever built, in construction order, whatever its state.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    pub fn link_axis(&self, id: ConstraintId) -> Option<LinkAxis> {
        let c = self.constraints.get(id.index())?;
        if c.a / self.cols == c.b / self.cols {
            Some(LinkAxis::Horizontal)
        } else {
            Some(LinkAxis::Vertical)
        }
    }

    /// Particle positions and lock flags, row-major.
    pub fn points(&self) -> impl Iterator<Item = PointView<F>> + '_ {
        self.particles.iter().map(|p| PointView { pos: p.pos, locked: p.locked })
    }

    /// Endpoints of every active link. Broken and removed links are left out.
    pub fn segments(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        self.constraints
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active())
            .map(move |(i, c)| Segment {
                id: ConstraintId(i),
                start: self.particles[c.a].pos,
                end: self.particles[c.b].pos,
            })
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Permanently take a link out of the simulation.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Result<(), ClothError> {
        let index = id.index();
        let count = self.constraints.len();
        let c = self
            .constraints
            .get_mut(index)
            .ok_or(ClothError::ConstraintOutOfBounds { index, count })?;
        if !c.remove() {
            return Err(ClothError::ConstraintInactive { index });
        }
        log::debug!("link {} removed", index);
        Ok(())
    }

    /// The newest active link whose endpoint bounding box contains `point`.
    pub fn pick_constraint(&self, point: Vec2<F>) -> Option<ConstraintId> {
        self.constraints
            .iter()
            .enumerate()
            .rev()
            .find(|(_, c)| c.is_active() && self.link_box(c).contains(point))
            .map(|(i, _)| ConstraintId(i))
    }

    /// Remove the link [`pick_constraint`](Self::pick_constraint) selects.
    pub fn remove_at(&mut self, point: Vec2<F>) -> Option<ConstraintId> {
        let id = self.pick_constraint(point)?;
        self.remove_constraint(id).ok()?;
        Some(id)
    }

    /// Remove every active link whose bounding box contains `point`.
    /// Returns how many were cut.
    pub fn cut_at(&mut self, point: Vec2<F>) -> usize {
        let particles = &self.particles;
        let mut cut = 0;
        for c in self.constraints.iter_mut().rev() {
            if !c.is_active() {
                continue;
            }
            let area = Aabb::from_corners(particles[c.a].pos, particles[c.b].pos);
            if area.contains(point) && c.remove() {
                cut += 1;
            }
        }
        if cut > 0 {
            log::debug!("cut {} links", cut);
        }
        cut
    }

    /// Integrate every particle once.
    pub(crate) fn integrate(&mut self, dt: F, config: &SimConfig<F>) {
        for p in self.particles.iter_mut() {
            p.integrate(dt, config);
        }
    }

    /// Relax every active link once, in construction order. Returns the
    /// number of links that broke during the sweep.
    pub(crate) fn relax_sweep<O: StepObserver>(&mut self, break_ratio: F, observer: &mut O) -> usize {
        let mut broken = 0;
        for (i, c) in self.constraints.iter_mut().enumerate() {
            if c.relax(&mut self.particles, break_ratio) == Relaxation::Broke {
                broken += 1;
                observer.on_link_broken(ConstraintId(i));
            }
        }
        broken
    }

    fn link_box(&self, c: &Constraint<F>) -> Aabb<F> {
        Aabb::from_corners(self.particles[c.a].pos, self.particles[c.b].pos)
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
    pub fn active_constraint_count(&self) -> usize { self.count_in(LinkState::Active) }
    pub fn broken_count(&self) -> usize { self.count_in(LinkState::Broken) }
    pub fn removed_count(&self) -> usize { self.count_in(LinkState::Removed) }

    fn count_in(&self, state: LinkState) -> usize {
        self.constraints.iter().filter(|c| c.state() == state).count()
    }
}
