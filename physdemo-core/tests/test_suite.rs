//! Tests for screen switching, input dispatch and render models

use glam::Vec2;
use physdemo_core::layout::{self, BACK_BUTTON};
use physdemo_core::tests::test_helpers::{
    approx_eq_f32, approx_eq_vec2, body_positions, RecordingRenderer,
};
use physdemo_core::{
    BallCount, Color, DemoConfig, DemoKind, DemoSuite, InputEvent, MassRatio, ObstacleShape,
    Renderer, Screen, Shape, Viewport,
};

fn click_button(suite: &mut DemoSuite, event: InputEvent) {
    let button = layout::buttons(suite.screen())
        .into_iter()
        .find(|b| b.event == event)
        .unwrap();
    suite.step(InputEvent::Click(button.rect.center()));
}

fn count_circles(shapes: &[Shape]) -> usize {
    shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle { .. }))
        .count()
}

#[test]
fn test_starts_on_main_menu() {
    let suite = DemoSuite::default();
    assert_eq!(suite.screen(), Screen::MainMenu);
    assert!(!suite.exit_requested());
}

#[test]
fn test_menu_buttons_open_each_demo() {
    let centers = [
        (Vec2::new(0.0, 0.375), DemoKind::Balls),
        (Vec2::new(0.0, 0.125), DemoKind::Squares),
        (Vec2::new(0.0, -0.125), DemoKind::Cradle),
        (Vec2::new(0.0, -0.375), DemoKind::Fluid),
    ];

    for (point, kind) in centers {
        let mut suite = DemoSuite::default();
        let model = suite.step(InputEvent::Click(point));
        assert_eq!(suite.screen(), Screen::Demo(kind));
        assert_eq!(model.screen, Screen::Demo(kind));
    }
}

#[test]
fn test_click_outside_menu_buttons_does_nothing() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Click(Vec2::new(0.9, 0.9)));
    suite.step(InputEvent::Click(Vec2::new(0.0, 0.47)));
    assert_eq!(suite.screen(), Screen::MainMenu);
}

#[test]
fn test_escape_and_back_return_to_menu() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Squares));
    suite.step(InputEvent::Escape);
    assert_eq!(suite.screen(), Screen::MainMenu);
    assert!(!suite.exit_requested(), "Escape in a demo only leaves the demo");

    suite.step(InputEvent::Open(DemoKind::Fluid));
    suite.step(InputEvent::Click(BACK_BUTTON.center()));
    assert_eq!(suite.screen(), Screen::MainMenu);
}

#[test]
fn test_escape_on_menu_requests_exit() {
    let mut suite = DemoSuite::default();
    let model = suite.step(InputEvent::Escape);
    assert!(suite.exit_requested());
    assert!(model.exit_requested);
}

#[test]
fn test_leaving_a_demo_pauses_it() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Balls));
    for _ in 0..10 {
        suite.step(InputEvent::Tick);
    }
    suite.step(InputEvent::Escape);
    let paused = body_positions(&suite, DemoKind::Balls);

    for _ in 0..50 {
        suite.step(InputEvent::Tick);
    }
    assert_eq!(body_positions(&suite, DemoKind::Balls), paused);

    suite.step(InputEvent::Open(DemoKind::Balls));
    assert_ne!(body_positions(&suite, DemoKind::Balls), paused, "Resumes where it left off");
}

#[test]
fn test_only_active_demo_advances() {
    let mut suite = DemoSuite::default();
    let squares = body_positions(&suite, DemoKind::Squares);
    let cradle = body_positions(&suite, DemoKind::Cradle);

    suite.step(InputEvent::Open(DemoKind::Fluid));
    for _ in 0..30 {
        suite.step(InputEvent::Tick);
    }

    assert_eq!(body_positions(&suite, DemoKind::Squares), squares);
    assert_eq!(body_positions(&suite, DemoKind::Cradle), cradle);
    assert!(suite.fluid.active_count() > 0);
}

#[test]
fn test_ball_count_buttons() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Balls));
    assert_eq!(suite.balls.balls().len(), 5);

    click_button(&mut suite, InputEvent::SetBallCount(BallCount::Fifty));
    assert_eq!(suite.balls.balls().len(), 50);
    assert_eq!(suite.balls.count(), BallCount::Fifty);

    click_button(&mut suite, InputEvent::SetBallCount(BallCount::Ten));
    assert_eq!(suite.balls.balls().len(), 10);
}

#[test]
fn test_mass_ratio_buttons_reset_the_squares() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Squares));
    for _ in 0..40 {
        suite.step(InputEvent::Tick);
    }

    click_button(&mut suite, InputEvent::SetMassRatio(MassRatio::Hundred));
    let [a, b] = suite.squares.squares();
    assert_eq!(suite.squares.ratio(), MassRatio::Hundred);
    assert_eq!(a.mass, 1.0);
    assert_eq!(b.mass, 100.0);
    // Reset, then advanced one tick
    assert!(approx_eq_f32(a.pos.x, -0.5 + a.vel.x, 1e-6));
    assert_eq!(b.pos.x, 0.2);
}

#[test]
fn test_fluid_buttons() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Fluid));
    let speed = suite.fluid.stream_speed();

    click_button(&mut suite, InputEvent::AdjustStreamSpeed(1));
    assert!(approx_eq_f32(suite.fluid.stream_speed(), speed + 0.001, 1e-6));
    click_button(&mut suite, InputEvent::AdjustStreamSpeed(-1));
    assert!(approx_eq_f32(suite.fluid.stream_speed(), speed, 1e-6));

    click_button(&mut suite, InputEvent::SetObstacle(ObstacleShape::Airfoil));
    assert_eq!(suite.fluid.obstacle().shape, ObstacleShape::Airfoil);
}

#[test]
fn test_clicking_a_bob_pulls_it_back() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Cradle));
    let bob = suite.cradle.pendulums()[1].bob_position();

    suite.step(InputEvent::Click(bob));

    let pendulums = suite.cradle.pendulums();
    assert!(pendulums[0].held && pendulums[1].held);
    assert!(!pendulums[2].held);
    assert!(pendulums[1].angle < -0.45, "got {}", pendulums[1].angle);
    assert_eq!(pendulums[3].angle, 0.0);
}

#[test]
fn test_cradle_click_elsewhere_is_ignored_by_other_demos() {
    let mut suite = DemoSuite::default();
    let bob = suite.cradle.pendulums()[1].bob_position();
    suite.step(InputEvent::Open(DemoKind::Balls));
    suite.step(InputEvent::Click(bob));
    assert!(suite.cradle.pendulums().iter().all(|p| !p.held));
}

#[test]
fn test_reset_restores_active_demo_only() {
    let mut suite = DemoSuite::default();
    suite.step(InputEvent::Open(DemoKind::Cradle));
    suite.step(InputEvent::Click(suite.cradle.pendulums()[0].bob_position()));
    suite.step(InputEvent::Open(DemoKind::Fluid));
    for _ in 0..200 {
        suite.step(InputEvent::Tick);
    }

    suite.step(InputEvent::Reset);

    for p in suite.fluid.active_particles() {
        assert!(p.pos.x < -0.7, "Fresh particles start at the inlet");
    }
    assert!(suite.cradle.pendulums()[0].held, "Cradle untouched");

    // Reset on the menu is a no-op
    suite.step(InputEvent::Back);
    suite.step(InputEvent::Reset);
    assert!(suite.cradle.pendulums()[0].held);
}

#[test]
fn test_render_models() {
    let mut suite = DemoSuite::default();
    let mut renderer = RecordingRenderer::default();

    renderer.draw(&suite.step(InputEvent::Tick));
    renderer.draw(&suite.step(InputEvent::Open(DemoKind::Balls)));
    renderer.draw(&suite.step(InputEvent::Open(DemoKind::Fluid)));
    assert_eq!(renderer.frames.len(), 3);

    let menu = &renderer.frames[0];
    assert_eq!(menu.clear_color, Color::BLACK);
    assert_eq!(menu.shapes.len(), 4);
    let titles: Vec<&str> = menu.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Bouncing Balls", "Colliding Squares", "Newton's Cradle", "Fluid Flow"]
    );

    let balls = &renderer.frames[1];
    assert_eq!(balls.screen, Screen::Demo(DemoKind::Balls));
    assert_eq!(count_circles(&balls.shapes), 5);
    assert!(balls.labels.iter().any(|l| l.text == "Back"));
    assert!(balls.labels.iter().any(|l| l.text == "5 balls"));

    let fluid = &renderer.frames[2];
    // Obstacle plus one circle per active particle
    assert_eq!(count_circles(&fluid.shapes), 1 + suite.fluid.active_count());
}

#[test]
fn test_status_lines() {
    let suite = DemoSuite::new(&DemoConfig::new().with_mass_ratio(MassRatio::Ten));
    let lines = suite.status_lines(DemoKind::Squares);
    assert!(lines[0].contains("1:10"), "got {:?}", lines);

    let lines = suite.status_lines(DemoKind::Balls);
    assert_eq!(lines[0], "5 balls");
}

#[test]
fn test_start_screen_from_config() {
    let config = DemoConfig::new().with_start_screen(Screen::Demo(DemoKind::Cradle));
    let suite = DemoSuite::new(&config);
    assert_eq!(suite.screen(), Screen::Demo(DemoKind::Cradle));
}

#[test]
fn test_viewport_mapping() {
    let viewport = Viewport::new(800.0, 600.0);
    assert_eq!(viewport.scale(), 300.0);

    assert!(approx_eq_vec2(viewport.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO, 1e-6));
    assert!(approx_eq_vec2(
        viewport.to_world(Vec2::new(400.0, 0.0)),
        Vec2::new(0.0, 1.0),
        1e-6
    ));
    assert!(approx_eq_vec2(
        viewport.to_screen(Vec2::new(0.5, -0.5)),
        Vec2::new(550.0, 450.0),
        1e-4
    ));

    let world = Vec2::new(-0.37, 0.81);
    let back = viewport.to_world(viewport.to_screen(world));
    assert!(approx_eq_vec2(back, world, 1e-5));
}
