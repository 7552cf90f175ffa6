use tatter::{
    ClothGrid, ConstraintId, GridConfig, LinkAxis, LinkState, NoOpStepObserver, SimConfig,
    Stepper, Vec2,
};

fn axis_counts(grid: &ClothGrid<f32>) -> (usize, usize) {
    let mut horizontal = 0;
    let mut vertical = 0;
    for i in 0..grid.constraint_count() {
        match grid.link_axis(ConstraintId(i)) {
            Some(LinkAxis::Horizontal) => horizontal += 1,
            Some(LinkAxis::Vertical) => vertical += 1,
            None => unreachable!(),
        }
    }
    (horizontal, vertical)
}

#[test]
fn topology_matches_lattice_for_various_sizes() {
    for &(rows, cols) in &[(1, 1), (1, 5), (5, 1), (2, 2), (3, 4), (7, 3)] {
        let grid = ClothGrid::build(&GridConfig::new(rows, cols), Vec2::zero()).unwrap();
        let (h, v) = axis_counts(&grid);
        assert_eq!(grid.particle_count(), rows * cols);
        assert_eq!(h, rows * (cols - 1), "horizontal links for {}x{}", rows, cols);
        assert_eq!(v, (rows - 1) * cols, "vertical links for {}x{}", rows, cols);
        assert_eq!(grid.constraint_count(), rows * cols * 2 - rows - cols);
    }
}

#[test]
fn links_only_join_lattice_neighbours() {
    let grid = ClothGrid::build(&GridConfig::<f32>::new(4, 5), Vec2::zero()).unwrap();
    let cols = grid.cols();
    for c in grid.constraints() {
        let (ar, ac) = (c.a / cols, c.a % cols);
        let (br, bc) = (c.b / cols, c.b % cols);
        let adjacent = (ar == br && ac + 1 == bc) || (ac == bc && ar + 1 == br);
        assert!(adjacent, "link {} -> {} is not between neighbours", c.a, c.b);
        assert_eq!(c.rest_length(), 10.0);
    }
}

#[test]
fn reference_scene_layout() {
    let grid = ClothGrid::build(&GridConfig::<f32>::reference(), Vec2::new(0.0, 3.0)).unwrap();
    assert_eq!(grid.particle_count(), 3500);
    assert_eq!(grid.constraint_count(), 50 * 69 + 49 * 70);
    assert_eq!(grid.position_at(0, 0), Vec2::new(55.0, 50.0));
    assert_eq!(grid.position_at(69, 48), Vec2::new(745.0, 530.0));
    assert_eq!(grid.position_at(0, 49), Vec2::new(50.0, 540.0));
}

#[test]
fn rejects_degenerate_dimensions() {
    assert!(ClothGrid::build(&GridConfig::<f32>::new(0, 3), Vec2::zero()).is_err());
    assert!(ClothGrid::build(&GridConfig::<f32>::new(3, 0), Vec2::zero()).is_err());
}

#[test]
fn two_by_two_frozen_at_zero_dt() {
    let sim: SimConfig<f32> = SimConfig::new().with_gravity(Vec2::zero()).with_friction(1.0);
    let mut grid = ClothGrid::build(&GridConfig::new(2, 2), sim.gravity).unwrap();
    let stepper = Stepper::new(sim).unwrap();

    let expected = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 10.0),
    ];
    assert_eq!(grid.positions(), expected);

    for _ in 0..5 {
        let report = stepper.step(&mut grid, 0.0, &mut NoOpStepObserver).unwrap();
        assert_eq!(report.newly_broken, 0);
        assert_eq!(report.active_links, 4);
    }

    assert_eq!(grid.positions(), expected);
    assert_eq!(grid.constraint_count(), 4);
    assert!(grid.constraints().iter().all(|c| c.state() == LinkState::Active));
    for c in grid.constraints() {
        assert_eq!(c.rest_length(), 10.0);
    }
}

#[test]
fn severed_cloth_falls_out_of_view() {
    let sim: SimConfig<f64> = SimConfig::new().with_gravity(Vec2::new(0.0, 1000.0));
    let mut grid = ClothGrid::build(&GridConfig::new(4, 3), sim.gravity).unwrap();
    let stepper = Stepper::new(sim).unwrap();
    let initial = grid.positions();

    let hanging: Vec<_> = (0..grid.constraint_count())
        .map(ConstraintId)
        .filter(|&id| {
            let c = grid.constraint(id).unwrap();
            grid.link_axis(id) == Some(LinkAxis::Vertical) && c.a < grid.cols()
        })
        .collect();
    assert_eq!(hanging.len(), 3);
    for id in hanging {
        grid.remove_constraint(id).unwrap();
    }

    for _ in 0..100 {
        stepper.step(&mut grid, 0.05, &mut NoOpStepObserver).unwrap();
    }

    assert_eq!(grid.broken_count(), 0);
    for row in 1..grid.rows() {
        for col in 0..grid.cols() {
            let now = grid.position_at(col, row);
            let then = initial[grid.index(col, row)];
            assert!(now.y > 600.0, "({}, {}) should have left the viewport, y = {}", col, row, now.y);
            assert!((now.x - then.x).abs() < 1e-6);
        }
    }
    for col in 0..grid.cols() {
        assert_eq!(grid.position_at(col, 0), initial[col]);
    }
}
