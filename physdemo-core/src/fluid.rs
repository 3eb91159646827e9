//! Particle stream flowing past a single obstacle.
//!
//! Particles live in a fixed pool. Every tick the pool is topped up from the
//! left edge, particles are advected and deflected around the obstacle, and
//! those leaving through the right edge are freed for reuse.

use crate::bounds::Bounds;
use crate::color::Color;
use crate::error::DemoError;
use crate::geometry::{
    check_airfoil_collision, check_triangle_collision, circle_overlap, triangle_vertices,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const MAX_FLUID_PARTICLES: usize = 200;
pub const FLUID_PARTICLE_RADIUS: f32 = 0.008;
pub const DEFAULT_STREAM_SPEED: f32 = 0.005;
/// Damping caps travel at 500x the inflow speed; slower streams stall mid-box
pub const MIN_STREAM_SPEED: f32 = 0.004;
pub const MAX_STREAM_SPEED: f32 = 0.012;
pub const STREAM_SPEED_STEP: f32 = 0.001;
/// Above this stream speed the flow picks up random perturbations
pub const TURBULENCE_THRESHOLD: f32 = 0.007;
pub const TURBULENCE_NOISE: f32 = 0.0004;
pub const FLUID_DAMPING: f32 = 0.998;
pub const OBSTACLE_RADIUS: f32 = 0.12;
/// Over-admission of the barycentric test, rounds the triangle's corners
pub const TRIANGLE_TOLERANCE: f32 = 0.1;
/// Chord length relative to the obstacle radius
pub const AIRFOIL_CHORD_SCALE: f32 = 3.0;
/// NACA 0020
pub const AIRFOIL_MAX_THICKNESS: f32 = 0.2;
/// Gap left between a pushed-out particle and the obstacle surface
const CONTACT_SLOP: f32 = 1e-4;
const MAX_PUSH_STEPS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct FluidParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Default for FluidParticle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: FLUID_PARTICLE_RADIUS,
            active: false,
        }
    }
}

impl FluidParticle {
    pub fn regime(&self, stream_speed: f32) -> FlowRegime {
        FlowRegime::classify(self.vel.length(), stream_speed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleShape {
    #[default]
    Circle,
    Triangle,
    Airfoil,
}

impl ObstacleShape {
    pub const ALL: [ObstacleShape; 3] = [
        ObstacleShape::Circle,
        ObstacleShape::Triangle,
        ObstacleShape::Airfoil,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObstacleShape::Circle => "ball",
            ObstacleShape::Triangle => "triangle",
            ObstacleShape::Airfoil => "airfoil",
        }
    }
}

impl fmt::Display for ObstacleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObstacleShape {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ball" | "circle" => Ok(ObstacleShape::Circle),
            "triangle" => Ok(ObstacleShape::Triangle),
            "airfoil" | "wing" => Ok(ObstacleShape::Airfoil),
            _ => Err(DemoError::UnknownObstacle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
    pub shape: ObstacleShape,
}

impl Obstacle {
    pub fn new(shape: ObstacleShape) -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: OBSTACLE_RADIUS,
            shape,
        }
    }

    pub fn chord(&self) -> f32 {
        self.radius * AIRFOIL_CHORD_SCALE
    }

    pub fn triangle(&self) -> [Vec2; 3] {
        triangle_vertices(self.pos, self.radius)
    }

    /// Shape-specific contact test for a particle at `p`
    pub fn collides(&self, p: Vec2, radius: f32) -> bool {
        match self.shape {
            ObstacleShape::Circle => circle_overlap(p, radius, self.pos, self.radius),
            ObstacleShape::Triangle => {
                check_triangle_collision(p, radius, &self.triangle(), TRIANGLE_TOLERANCE)
            }
            ObstacleShape::Airfoil => check_airfoil_collision(
                p,
                radius,
                self.pos,
                self.chord(),
                AIRFOIL_MAX_THICKNESS,
            ),
        }
    }

    /// Move `p` radially away from the center until it clears the surface.
    /// Returns the outward normal used.
    fn push_out(&self, p: &mut Vec2, radius: f32) -> Vec2 {
        let normal = (*p - self.pos).try_normalize().unwrap_or(Vec2::NEG_X);

        match self.shape {
            ObstacleShape::Circle => {
                *p = self.pos + normal * (self.radius + radius + CONTACT_SLOP);
            }
            ObstacleShape::Triangle | ObstacleShape::Airfoil => {
                let step = radius * 0.5;
                for _ in 0..MAX_PUSH_STEPS {
                    if !self.collides(*p, radius) {
                        break;
                    }
                    *p += normal * step;
                }
            }
        }

        normal
    }
}

/// Visual flow classification by instantaneous speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(speed: f32, stream_speed: f32) -> Self {
        if speed < 1.5 * stream_speed {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn color(self) -> Color {
        match self {
            FlowRegime::Laminar => Color::LAMINAR,
            FlowRegime::Turbulent => Color::TURBULENT,
        }
    }
}

/// State of the fluid demo
#[derive(Debug, Clone)]
pub struct FluidSim {
    pub bounds: Bounds,
    particles: Vec<FluidParticle>,
    active_count: usize,
    obstacle: Obstacle,
    stream_speed: f32,
    rng: StdRng,
}

impl FluidSim {
    pub fn new(shape: ObstacleShape, stream_speed: f32, seed: u64) -> Self {
        Self {
            bounds: Bounds::default(),
            particles: vec![FluidParticle::default(); MAX_FLUID_PARTICLES],
            active_count: 0,
            obstacle: Obstacle::new(shape),
            stream_speed: stream_speed.clamp(MIN_STREAM_SPEED, MAX_STREAM_SPEED),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[FluidParticle] {
        &self.particles
    }

    pub fn active_particles(&self) -> impl Iterator<Item = &FluidParticle> {
        self.particles.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Active particles as (laminar, turbulent) counts
    pub fn regime_counts(&self) -> (usize, usize) {
        self.active_particles()
            .fold((0, 0), |(laminar, turbulent), p| {
                match p.regime(self.stream_speed) {
                    FlowRegime::Laminar => (laminar + 1, turbulent),
                    FlowRegime::Turbulent => (laminar, turbulent + 1),
                }
            })
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn stream_speed(&self) -> f32 {
        self.stream_speed
    }

    pub fn is_turbulent(&self) -> bool {
        self.stream_speed > TURBULENCE_THRESHOLD
    }

    pub fn set_stream_speed(&mut self, speed: f32) {
        self.stream_speed = speed.clamp(MIN_STREAM_SPEED, MAX_STREAM_SPEED);
        debug!(speed = self.stream_speed, "stream speed changed");
    }

    pub fn adjust_stream_speed(&mut self, steps: i32) {
        self.set_stream_speed(self.stream_speed + steps as f32 * STREAM_SPEED_STEP);
    }

    /// Swap the obstacle shape; the particles keep flowing
    pub fn set_obstacle(&mut self, shape: ObstacleShape) {
        self.obstacle.shape = shape;
        debug!(shape = %shape, "obstacle changed");
    }

    /// Free every particle
    pub fn reset(&mut self) {
        for p in &mut self.particles {
            p.active = false;
        }
        self.active_count = 0;
        debug!("fluid reset");
    }

    /// Occupy a free slot with a particle in the given state.
    /// Returns the slot index, or `None` when the pool is full.
    pub fn spawn_at(&mut self, pos: Vec2, vel: Vec2) -> Option<usize> {
        let index = self.particles.iter().position(|p| !p.active)?;
        self.particles[index] = FluidParticle {
            pos,
            vel,
            radius: FLUID_PARTICLE_RADIUS,
            active: true,
        };
        self.active_count += 1;
        Some(index)
    }

    /// Fill free slots from the left edge until the pool is full
    pub fn replenish(&mut self) -> usize {
        let missing = MAX_FLUID_PARTICLES - self.active_count;
        let x = self.bounds.left + FLUID_PARTICLE_RADIUS;
        let y_min = self.bounds.bottom + FLUID_PARTICLE_RADIUS;
        let y_max = self.bounds.top - FLUID_PARTICLE_RADIUS;
        let vel = Vec2::new(self.stream_speed, 0.0);

        let mut spawned = 0;
        for _ in 0..missing {
            let y = self.rng.gen_range(y_min..y_max);
            if self.spawn_at(Vec2::new(x, y), vel).is_none() {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Advance one fixed tick
    pub fn update(&mut self) {
        self.replenish();

        let stream = self.stream_speed;
        let turbulent = self.is_turbulent();
        let bounds = self.bounds;

        for p in self.particles.iter_mut().filter(|p| p.active) {
            p.pos += p.vel;

            if self.obstacle.collides(p.pos, p.radius) {
                deflect(&self.obstacle, p, stream);
            }

            if p.pos.x > bounds.right {
                p.active = false;
                self.active_count -= 1;
                continue;
            }
            if p.pos.x - p.radius < bounds.left {
                p.pos.x = bounds.left + p.radius;
                p.vel.x = stream;
            }
            if p.pos.y + p.radius > bounds.top {
                p.pos.y = bounds.top - p.radius;
                p.vel.y = 0.0;
            } else if p.pos.y - p.radius < bounds.bottom {
                p.pos.y = bounds.bottom + p.radius;
                p.vel.y = 0.0;
            }

            p.vel *= FLUID_DAMPING;
            if turbulent {
                p.vel += Vec2::new(
                    self.rng.gen_range(-1.0..=1.0),
                    self.rng.gen_range(-1.0..=1.0),
                ) * TURBULENCE_NOISE;
            }
        }
    }
}

/// Push a colliding particle clear of the obstacle and steer it around.
///
/// The impulse is tangential to the contact normal and biased downstream and
/// away from the centerline; forward speed never drops under half the stream.
fn deflect(obstacle: &Obstacle, p: &mut FluidParticle, stream: f32) {
    let normal = obstacle.push_out(&mut p.pos, p.radius);

    let side = if normal.y >= 0.0 { 1.0 } else { -1.0 };
    let mut tangent = normal.perp();
    if tangent.dot(Vec2::new(1.0, side)) < 0.0 {
        tangent = -tangent;
    }

    p.vel += tangent * (stream * 0.5);
    p.vel.x = p.vel.x.max(stream * 0.5);
}
