//! Read-only draw lists built from simulation state.
//!
//! The core never talks to a graphics API. Each `step` produces a
//! [`RenderModel`] in world coordinates; a host [`Renderer`] paints it.

use crate::balls::BallSim;
use crate::bounds::Bounds;
use crate::color::Color;
use crate::cradle::NewtonsCradle;
use crate::fluid::{FluidSim, ObstacleShape, AIRFOIL_MAX_THICKNESS};
use crate::geometry::airfoil_half_thickness;
use crate::layout::Button;
use crate::squares::SquareSim;
use crate::suite::Screen;
use glam::Vec2;

const AIRFOIL_OUTLINE_SAMPLES: usize = 24;
const OBSTACLE_COLOR: Color = Color::rgb(0.55, 0.55, 0.6);
const BOX_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);
const STRING_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);

/// A filled primitive or a line, in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Convex polygon
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Center of the text
    pub pos: Vec2,
    pub text: String,
    pub color: Color,
}

/// Everything a host needs to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub screen: Screen,
    pub clear_color: Color,
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
    /// Set once the user asked to leave from the main menu
    pub exit_requested: bool,
}

impl RenderModel {
    pub fn new(screen: Screen, clear_color: Color) -> Self {
        Self {
            screen,
            clear_color,
            shapes: Vec::new(),
            labels: Vec::new(),
            exit_requested: false,
        }
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.shapes.push(Shape::Rect { min, size, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    pub fn polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.shapes.push(Shape::Polygon { points, color });
    }

    pub fn label(&mut self, pos: Vec2, text: impl Into<String>, color: Color) {
        self.labels.push(Label {
            pos,
            text: text.into(),
            color,
        });
    }

    pub fn button(&mut self, button: &Button) {
        self.rect(button.rect.min(), button.rect.size(), button.color);
        self.label(button.rect.center(), button.label.clone(), Color::WHITE);
    }

    pub fn bounds_outline(&mut self, bounds: &Bounds) {
        let corners = [
            Vec2::new(bounds.left, bounds.bottom),
            Vec2::new(bounds.right, bounds.bottom),
            Vec2::new(bounds.right, bounds.top),
            Vec2::new(bounds.left, bounds.top),
        ];
        for i in 0..corners.len() {
            self.line(corners[i], corners[(i + 1) % corners.len()], BOX_COLOR);
        }
    }
}

/// Host drawing capability
pub trait Renderer {
    fn draw(&mut self, model: &RenderModel);
}

pub fn draw_balls(sim: &BallSim, model: &mut RenderModel) {
    model.bounds_outline(&sim.bounds);
    for ball in sim.balls() {
        model.circle(ball.pos, ball.radius, ball.color);
    }
}

pub fn draw_squares(sim: &SquareSim, model: &mut RenderModel) {
    model.bounds_outline(&sim.bounds);
    for square in sim.squares() {
        let half = Vec2::splat(square.half_size());
        model.rect(square.pos - half, half * 2.0, square.color);
    }
}

pub fn draw_cradle(cradle: &NewtonsCradle, model: &mut RenderModel) {
    let pendulums = cradle.pendulums();
    if let (Some(first), Some(last)) = (pendulums.first(), pendulums.last()) {
        let overhang = Vec2::new(first.bob_radius, 0.0);
        model.line(first.anchor - overhang, last.anchor + overhang, BOX_COLOR);
    }

    for p in pendulums {
        let bob = p.bob_position();
        model.line(p.anchor, bob, STRING_COLOR);
        let color = if p.held { p.color.scaled(0.7) } else { p.color };
        model.circle(bob, p.bob_radius, color);
    }
}

pub fn draw_fluid(sim: &FluidSim, model: &mut RenderModel) {
    model.bounds_outline(&sim.bounds);

    let obstacle = sim.obstacle();
    match obstacle.shape {
        ObstacleShape::Circle => model.circle(obstacle.pos, obstacle.radius, OBSTACLE_COLOR),
        ObstacleShape::Triangle => model.polygon(obstacle.triangle().to_vec(), OBSTACLE_COLOR),
        ObstacleShape::Airfoil => model.polygon(
            airfoil_outline(obstacle.pos, obstacle.chord(), AIRFOIL_MAX_THICKNESS),
            OBSTACLE_COLOR,
        ),
    }

    let stream = sim.stream_speed();
    for p in sim.active_particles() {
        model.circle(p.pos, p.radius, p.regime(stream).color());
    }
}

/// Closed outline: upper surface leading to trailing edge, then lower back
pub fn airfoil_outline(center: Vec2, chord: f32, max_thickness: f32) -> Vec<Vec2> {
    let leading_edge = center.x - chord * 0.5;
    let sample = |i: usize| {
        let xc = i as f32 / AIRFOIL_OUTLINE_SAMPLES as f32;
        (
            leading_edge + xc * chord,
            airfoil_half_thickness(xc, chord, max_thickness),
        )
    };

    let upper = (0..=AIRFOIL_OUTLINE_SAMPLES).map(|i| {
        let (x, half) = sample(i);
        Vec2::new(x, center.y + half)
    });
    let lower = (1..AIRFOIL_OUTLINE_SAMPLES).rev().map(|i| {
        let (x, half) = sample(i);
        Vec2::new(x, center.y - half)
    });
    upper.chain(lower).collect()
}
