use particle_background::connections::connect;
use particle_background::driver::Scene;
use particle_background::pointer::PointerState;
use particle_background::simulation::Simulation;
use particle_background::surface::{Bounds, DrawCommand, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn three_hundred_square_holds_ten_particles() {
    let mut sim = Simulation::new(seeded(1));
    sim.init(Bounds::new(300.0, 300.0));
    assert_eq!(sim.len(), 10);
}

#[test]
fn pointer_keeps_particles_on_surface() {
    let bounds = Bounds::new(400.0, 300.0);
    let mut scene = Scene::new(bounds, seeded(2));
    let mut surface = Recorder::new();
    // sweep the pointer across the surface for a while
    for step in 0..2000 {
        let t = step as f64 / 2000.0;
        scene.pointer_move(t * bounds.width, (1.0 - t) * bounds.height);
        scene.frame(&mut surface).unwrap();
        surface.commands.clear();
    }
    let radius = scene.pointer().radius();
    let (px, py) = scene.pointer().position().unwrap();
    for p in scene.simulation().particles() {
        // anything inside the repulsion range was clamped this frame
        let d = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
        if d > 0.0 && d < radius + p.size + 50.0 {
            assert!(p.x >= p.size - 1e-9 && p.x <= bounds.width - p.size + 1e-9);
            assert!(p.y >= p.size - 1e-9 && p.y <= bounds.height - p.size + 1e-9);
        }
        assert!(p.size >= 1.0 && p.size < 3.0);
    }
}

#[test]
fn leaving_pointer_restores_free_drift() {
    let bounds = Bounds::new(500.0, 500.0);
    let mut with_leave = Scene::new(bounds, seeded(9));
    let mut untouched = Scene::new(bounds, seeded(9));
    with_leave.pointer_move(250.0, 250.0);
    with_leave.pointer_leave();

    let mut a = Recorder::new();
    let mut b = Recorder::new();
    for _ in 0..50 {
        with_leave.frame(&mut a).unwrap();
        untouched.frame(&mut b).unwrap();
    }
    assert_eq!(a.commands, b.commands);
    assert_eq!(
        with_leave.simulation().particles(),
        untouched.simulation().particles()
    );
}

#[test]
fn resize_replaces_collection() {
    let mut scene = Scene::new(Bounds::new(800.0, 600.0), seeded(4));
    let before = scene.simulation().particles().to_vec();
    scene.resize(Bounds::new(800.0, 600.0));
    assert_eq!(scene.simulation().len(), before.len());
    assert_ne!(scene.simulation().particles(), &before[..]);
}

#[test]
fn zero_surface_is_a_quiet_field() {
    let bounds = Bounds::new(0.0, 0.0);
    let mut sim = Simulation::new(seeded(5));
    sim.init(bounds);
    sim.tick(&PointerState::new(bounds), bounds);
    let mut surface = Recorder::new();
    connect(sim.particles(), bounds, &mut surface).unwrap();
    assert!(sim.is_empty());
    assert!(surface.commands.is_empty());
}

#[test]
fn connection_lines_share_particle_color() {
    let mut scene = Scene::new(Bounds::new(300.0, 300.0), seeded(6));
    let mut surface = Recorder::new();
    scene.frame(&mut surface).unwrap();
    for line in surface.lines() {
        match line {
            DrawCommand::Line { stroke, width, .. } => {
                assert!(stroke.starts_with("rgba(88, 166, 255, "));
                assert_eq!(*width, 1.0);
            }
            _ => unreachable!(),
        }
    }
}
