use tatter::{ClothGrid, GridConfig, NoOpStepObserver, Particle, SimConfig, Stepper, Vec2};

fn frictionless() -> SimConfig<f64> {
    SimConfig::new().with_friction(1.0).with_viewport_width(1.0e6)
}

#[test]
fn constant_acceleration_tracks_analytic_fall() {
    let config = frictionless();
    let a = 2.0;
    let dt = 0.01;
    let n = 100;
    let mut p = Particle::new(Vec2::new(10.0, 100.0), Vec2::new(0.0, a));

    for _ in 0..n {
        p.integrate(dt, &config);
    }

    let t = n as f64 * dt;
    let analytic = 100.0 + 0.5 * a * t * t;
    // Starting from rest, Verlet lands at y0 + a dt^2 n(n+1)/2, which is
    // ahead of the analytic answer by a dt^2 n / 2.
    let verlet = 100.0 + a * dt * dt * (n * (n + 1)) as f64 / 2.0;
    assert!((p.pos.y - verlet).abs() < 1e-9, "pos.y = {}, expected {}", p.pos.y, verlet);
    assert!((p.pos.y - analytic).abs() < 0.02, "pos.y = {}, analytic {}", p.pos.y, analytic);
    assert_eq!(p.pos.x, 10.0);
}

#[test]
fn horizontal_push_fades_under_friction() {
    let config: SimConfig<f64> = SimConfig::new().with_gravity(Vec2::zero());
    let mut p = Particle::new(Vec2::new(400.0, 100.0), Vec2::new(50.0, 0.0));
    for _ in 0..5 {
        p.integrate(0.016, &config);
    }
    assert_eq!(p.acceleration.x, 0.0);
    assert!(p.pos.x > 400.0, "push should have moved the particle right");
}

#[test]
fn clamp_holds_sides_and_top_but_not_bottom() {
    let config: SimConfig<f32> = SimConfig::new().with_gravity(Vec2::zero());

    let mut left = Particle::new(Vec2::new(5.0, 100.0), Vec2::zero());
    left.prev_pos = Vec2::new(25.0, 100.0);
    left.integrate(0.016, &config);
    assert_eq!(left.pos.x, 0.0);

    let mut right = Particle::new(Vec2::new(795.0, 100.0), Vec2::zero());
    right.prev_pos = Vec2::new(775.0, 100.0);
    right.integrate(0.016, &config);
    assert_eq!(right.pos.x, 800.0);

    let mut up = Particle::new(Vec2::new(100.0, 5.0), Vec2::zero());
    up.prev_pos = Vec2::new(100.0, 25.0);
    up.integrate(0.016, &config);
    assert_eq!(up.pos.y, 0.0);

    let mut down = Particle::new(Vec2::new(100.0, 5000.0), Vec2::zero());
    down.prev_pos = Vec2::new(100.0, 4000.0);
    down.integrate(0.016, &config);
    assert_eq!(down.pos.y, 6000.0);
}

#[test]
fn locked_particles_are_bit_identical_after_many_steps() {
    let sim: SimConfig<f32> = SimConfig::new();
    let mut grid = ClothGrid::build(&GridConfig::reference(), sim.gravity).unwrap();
    let stepper = Stepper::new(sim).unwrap();

    let before: Vec<_> = grid.particles()[..grid.cols()].to_vec();
    grid.push(Vec2::new(40.0, 0.0));
    for _ in 0..60 {
        stepper.step(&mut grid, 0.016, &mut NoOpStepObserver).unwrap();
    }

    for (col, init) in before.iter().enumerate() {
        let now = grid.particle(col).unwrap();
        assert!(now.locked);
        assert_eq!(now.pos.x.to_bits(), init.pos.x.to_bits(), "col {}", col);
        assert_eq!(now.pos.y.to_bits(), init.pos.y.to_bits(), "col {}", col);
        assert_eq!(now.prev_pos.x.to_bits(), init.prev_pos.x.to_bits(), "col {}", col);
        assert_eq!(now.prev_pos.y.to_bits(), init.prev_pos.y.to_bits(), "col {}", col);
    }
}
