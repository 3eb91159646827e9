//! Bouncing balls in a box with pairwise elastic collisions.

use crate::bounds::Bounds;
use crate::color::Color;
use crate::error::DemoError;
use crate::geometry::contact_normal;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::fmt;
use tracing::debug;

/// A circular body. Balls carry no mass; collisions treat them as equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Ball counts offered by the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallCount {
    #[default]
    Five,
    Ten,
    Fifty,
}

impl BallCount {
    pub const ALL: [BallCount; 3] = [BallCount::Five, BallCount::Ten, BallCount::Fifty];

    pub fn get(self) -> usize {
        match self {
            BallCount::Five => 5,
            BallCount::Ten => 10,
            BallCount::Fifty => 50,
        }
    }

    /// Radius and speed for this many balls; more balls get smaller and slower
    fn radius_and_speed(self) -> (f32, f32) {
        match self.get() {
            n if n <= 5 => (0.05, 0.003),
            n if n <= 10 => (0.035, 0.0025),
            _ => (0.018, 0.0015),
        }
    }
}

impl TryFrom<u32> for BallCount {
    type Error = DemoError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(BallCount::Five),
            10 => Ok(BallCount::Ten),
            50 => Ok(BallCount::Fifty),
            other => Err(DemoError::InvalidBallCount(other)),
        }
    }
}

impl fmt::Display for BallCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// State of the ball demo
#[derive(Debug, Clone)]
pub struct BallSim {
    pub bounds: Bounds,
    balls: Vec<Ball>,
    count: BallCount,
    rng: StdRng,
}

impl BallSim {
    pub fn new(count: BallCount, seed: u64) -> Self {
        let mut sim = Self {
            bounds: Bounds::default(),
            balls: Vec::with_capacity(BallCount::Fifty.get()),
            count,
            rng: StdRng::seed_from_u64(seed),
        };
        sim.init_balls(count);
        sim
    }

    /// Build a simulation from explicit bodies, bypassing random placement
    pub fn from_balls(balls: Vec<Ball>) -> Self {
        let count = match balls.len() {
            n if n <= 5 => BallCount::Five,
            n if n <= 10 => BallCount::Ten,
            _ => BallCount::Fifty,
        };
        Self {
            bounds: Bounds::default(),
            balls,
            count,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn count(&self) -> BallCount {
        self.count
    }

    /// Re-place `count` balls on a randomized ring.
    ///
    /// Angles are evenly spaced; each ball gets its own ring radius in
    /// [0.2, 0.7] (scaled to the box) and a random direction of travel.
    pub fn init_balls(&mut self, count: BallCount) {
        let n = count.get();
        let (radius, speed) = count.radius_and_speed();
        let half_w = self.bounds.width() * 0.5;
        let half_h = self.bounds.height() * 0.5;
        let center = self.bounds.center();

        self.count = count;
        self.balls.clear();
        for i in 0..n {
            let angle = i as f32 * TAU / n as f32;
            let ring = self.rng.gen_range(0.2..0.7);
            let pos = center + Vec2::new(angle.cos() * half_w, angle.sin() * half_h) * ring;

            let heading = self.rng.gen_range(0.0..TAU);
            let vel = Vec2::new(heading.cos(), heading.sin()) * speed;

            let color = Color::rgb(
                self.rng.gen_range(0.3..1.0),
                self.rng.gen_range(0.3..1.0),
                self.rng.gen_range(0.3..1.0),
            );

            self.balls.push(Ball {
                pos,
                vel,
                radius,
                color,
            });
        }

        debug!(count = n, radius, speed, "balls initialized");
    }

    /// Advance one fixed tick
    pub fn update(&mut self) {
        for ball in &mut self.balls {
            ball.pos += ball.vel;
            self.bounds.reflect(&mut ball.pos, &mut ball.vel, ball.radius);
        }

        let n = self.balls.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.balls.split_at_mut(j);
                resolve_ball_pair(&mut head[i], &mut tail[0]);
            }
        }

        // Pair corrections can nudge a ball past a wall it was resting on
        for ball in &mut self.balls {
            self.bounds.clamp(&mut ball.pos, ball.radius);
        }
    }
}

/// Separate two overlapping balls and exchange their normal velocities.
///
/// Returns whether the pair was in contact.
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball) -> bool {
    let min_dist = a.radius + b.radius;
    let Some((normal, dist)) = contact_normal(a.pos, b.pos) else {
        return false;
    };
    if dist >= min_dist {
        return false;
    }

    let correction = normal * ((min_dist - dist) * 0.5);
    a.pos -= correction;
    b.pos += correction;

    // Equal masses: the normal components simply trade places
    let va = a.vel.dot(normal);
    let vb = b.vel.dot(normal);
    a.vel += normal * (vb - va);
    b.vel += normal * (va - vb);

    true
}
