use tatter::{ClothGrid, GridConfig, NoOpStepObserver, SimConfig, Stepper, Vec2};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    grid: ClothGrid<f32>,
    stepper: Stepper<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// The reference curtain: 50 x 70 particles hung from the top edge of
    /// an 800 x 600 canvas.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ClothDemo, JsError> {
        let sim = SimConfig::new();
        let grid = ClothGrid::build(&GridConfig::reference(), sim.gravity)?;
        let stepper = Stepper::new(sim)?;
        Ok(ClothDemo { grid, stepper })
    }

    /// Advance by the frame's wall-clock time. Returns fixed steps taken.
    pub fn update(&mut self, frame_dt: f32) -> Result<usize, JsError> {
        Ok(self.stepper.advance(&mut self.grid, frame_dt, &mut NoOpStepObserver)?)
    }

    /// Remove the newest link under the pointer. Returns its id or -1.
    pub fn click(&mut self, x: f32, y: f32) -> i32 {
        match self.grid.remove_at(Vec2::new(x, y)) {
            Some(id) => id.index() as i32,
            None => -1,
        }
    }

    /// Remove every link under the pointer, as when dragging with the button held.
    pub fn cut(&mut self, x: f32, y: f32) -> usize {
        self.grid.cut_at(Vec2::new(x, y))
    }

    pub fn gust(&mut self, strength: f32) {
        self.grid.push(Vec2::new(strength, 0.0));
    }

    /// Returns flat [x0, y0, locked0, x1, y1, locked1, ...] with locked as 0 or 1.
    pub fn points(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.grid.particle_count() * 3);
        for p in self.grid.points() {
            out.push(p.pos.x);
            out.push(p.pos.y);
            out.push(if p.locked { 1.0 } else { 0.0 });
        }
        out
    }

    /// Returns flat [x1, y1, x2, y2, ...] for every link still drawn.
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.grid.active_constraint_count() * 4);
        for s in self.grid.segments() {
            out.extend_from_slice(&[s.start.x, s.start.y, s.end.x, s.end.y]);
        }
        out
    }

    pub fn link_count(&self) -> usize {
        self.grid.active_constraint_count()
    }

    pub fn torn_count(&self) -> usize {
        self.grid.broken_count()
    }

    pub fn viewport_width(&self) -> f32 {
        self.stepper.config().viewport_width
    }
}
