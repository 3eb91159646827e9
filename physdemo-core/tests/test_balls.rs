//! Tests for the bouncing ball demo

use glam::Vec2;
use physdemo_core::balls::resolve_ball_pair;
use physdemo_core::tests::test_helpers::{approx_eq_f32, make_ball};
use physdemo_core::{BallCount, BallSim, Bounds, BOX_BOTTOM, BOX_LEFT, BOX_RIGHT, BOX_TOP};

fn assert_inside(sim: &BallSim, tick: usize) {
    // Clamped positions can land a rounding error past the wall
    let tol = 1e-5;
    let bounds = Bounds::new(BOX_LEFT - tol, BOX_RIGHT + tol, BOX_TOP + tol, BOX_BOTTOM - tol);
    for (i, ball) in sim.balls().iter().enumerate() {
        assert!(
            bounds.contains(ball.pos, ball.radius),
            "Ball {} escaped at tick {}: {:?}",
            i,
            tick,
            ball.pos
        );
    }
}

#[test]
fn test_balls_stay_in_box() {
    for count in BallCount::ALL {
        let mut sim = BallSim::new(count, 7);
        assert_inside(&sim, 0);
        for tick in 1..=2000 {
            sim.update();
            assert_inside(&sim, tick);
        }
    }
}

#[test]
fn test_head_on_collision_swaps_velocities() {
    let mut sim = BallSim::from_balls(vec![
        make_ball(Vec2::new(-0.04, 0.0), Vec2::new(0.01, 0.002), 0.05),
        make_ball(Vec2::new(0.04, 0.0), Vec2::new(-0.01, 0.002), 0.05),
    ]);

    sim.update();

    let [a, b] = [&sim.balls()[0], &sim.balls()[1]];
    let dist = a.pos.distance(b.pos);
    assert!(dist >= 0.1 - 1e-5, "Balls should no longer overlap, distance {}", dist);

    assert!(approx_eq_f32(a.vel.x, -0.01, 1e-7));
    assert!(approx_eq_f32(b.vel.x, 0.01, 1e-7));
    assert_eq!(a.vel.y, 0.002, "Tangential velocity untouched");
    assert_eq!(b.vel.y, 0.002, "Tangential velocity untouched");
}

#[test]
fn test_pair_resolution_keeps_tangential_component() {
    let mut a = make_ball(Vec2::new(0.0, 0.0), Vec2::new(0.01, 0.005), 0.05);
    let mut b = make_ball(Vec2::new(0.08, 0.0), Vec2::new(-0.01, -0.003), 0.05);

    assert!(resolve_ball_pair(&mut a, &mut b));

    assert!(approx_eq_f32(a.vel.x, -0.01, 1e-7));
    assert!(approx_eq_f32(a.vel.y, 0.005, 1e-7));
    assert!(approx_eq_f32(b.vel.x, 0.01, 1e-7));
    assert!(approx_eq_f32(b.vel.y, -0.003, 1e-7));
    // Each pushed by half the 0.02 overlap
    assert!(approx_eq_f32(a.pos.x, -0.01, 1e-6));
    assert!(approx_eq_f32(b.pos.x, 0.09, 1e-6));
}

#[test]
fn test_coincident_balls_are_ignored() {
    let mut a = make_ball(Vec2::ZERO, Vec2::new(0.01, 0.0), 0.05);
    let mut b = make_ball(Vec2::ZERO, Vec2::new(-0.01, 0.0), 0.05);

    assert!(!resolve_ball_pair(&mut a, &mut b));
    assert!(a.pos.is_finite() && a.vel.is_finite());
    assert!(b.pos.is_finite() && b.vel.is_finite());
}

#[test]
fn test_separated_balls_do_not_interact() {
    let mut a = make_ball(Vec2::new(-0.2, 0.0), Vec2::new(0.01, 0.0), 0.05);
    let mut b = make_ball(Vec2::new(0.2, 0.0), Vec2::new(-0.01, 0.0), 0.05);

    assert!(!resolve_ball_pair(&mut a, &mut b));
    assert_eq!(a.vel, Vec2::new(0.01, 0.0));
    assert_eq!(b.vel, Vec2::new(-0.01, 0.0));
}

#[test]
fn test_wall_reflection() {
    let mut sim = BallSim::from_balls(vec![make_ball(
        Vec2::new(0.74, 0.0),
        Vec2::new(0.02, 0.0),
        0.05,
    )]);

    sim.update();

    let ball = &sim.balls()[0];
    assert!(approx_eq_f32(ball.pos.x, 0.75, 1e-6), "Clamped to wall, got {}", ball.pos.x);
    assert!(approx_eq_f32(ball.vel.x, -0.02, 1e-7), "Velocity reflected");
}

#[test]
fn test_init_balls_scales_with_count() {
    let mut sim = BallSim::new(BallCount::Five, 1);
    assert_eq!(sim.balls().len(), 5);
    for ball in sim.balls() {
        assert!(approx_eq_f32(ball.radius, 0.05, 1e-7));
        assert!(approx_eq_f32(ball.vel.length(), 0.003, 1e-6));
    }

    sim.init_balls(BallCount::Ten);
    assert_eq!(sim.count(), BallCount::Ten);
    assert_eq!(sim.balls().len(), 10);
    assert!(sim.balls().iter().all(|b| approx_eq_f32(b.radius, 0.035, 1e-7)));

    sim.init_balls(BallCount::Fifty);
    assert_eq!(sim.balls().len(), 50);
    for ball in sim.balls() {
        assert!(approx_eq_f32(ball.radius, 0.018, 1e-7));
        assert!(approx_eq_f32(ball.vel.length(), 0.0015, 1e-6));
    }
}

#[test]
fn test_init_balls_places_on_ring() {
    let sim = BallSim::new(BallCount::Ten, 3);
    for ball in sim.balls() {
        // Undo the aspect scaling to recover the ring radius
        let ring = Vec2::new(ball.pos.x / 0.8, ball.pos.y / 0.6).length();
        assert!(
            (0.2 - 1e-5..=0.7 + 1e-5).contains(&ring),
            "Ring radius {} out of range",
            ring
        );
    }
}
