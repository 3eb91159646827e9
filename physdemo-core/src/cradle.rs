//! Newton's cradle: five pendulums evolved in angle space.

use crate::color::Color;
use crate::geometry::contact_normal;
use glam::Vec2;
use tracing::debug;

pub const PENDULUM_COUNT: usize = 5;
pub const PENDULUM_LENGTH: f32 = 0.6;
pub const BOB_RADIUS: f32 = 0.06;
pub const BOB_MASS: f32 = 1.0;
pub const ANCHOR_Y: f32 = 0.45;
/// Gravity in world units per tick squared
pub const CRADLE_GRAVITY: f32 = 0.0015;
pub const ANGULAR_DAMPING: f32 = 0.999;
pub const PULL_BACK_ANGLE: f32 = -0.5;
/// Bobs closer than this are in contact
pub const COLLISION_DISTANCE: f32 = 2.0 * BOB_RADIUS;
/// Clicks within this distance of a bob center grab it
pub const PICK_DISTANCE: f32 = 1.5 * BOB_RADIUS;

#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    pub anchor: Vec2,
    /// Radians from the downward vertical, positive to the right
    pub angle: f32,
    pub angular_vel: f32,
    pub length: f32,
    /// All bobs share one mass, so impacts simply swap angular velocities
    pub mass: f32,
    pub bob_radius: f32,
    pub color: Color,
    /// Set when the user pulled this bob back
    pub held: bool,
}

impl Pendulum {
    pub fn bob_position(&self) -> Vec2 {
        self.anchor + Vec2::new(self.angle.sin(), -self.angle.cos()) * self.length
    }

    /// Linear bob velocity, the time derivative of `bob_position`
    pub fn bob_velocity(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * (self.angular_vel * self.length)
    }

    /// Recover the angle from a horizontal bob position.
    /// Only meaningful for small swings; the ratio is clamped for `asin`.
    fn set_angle_from_bob_x(&mut self, bob_x: f32) {
        let ratio = ((bob_x - self.anchor.x) / self.length).clamp(-1.0, 1.0);
        self.angle = ratio.asin();
    }
}

/// State of the cradle demo
#[derive(Debug, Clone)]
pub struct NewtonsCradle {
    pendulums: [Pendulum; PENDULUM_COUNT],
    pub gravity: f32,
}

impl NewtonsCradle {
    pub fn new() -> Self {
        Self {
            pendulums: std::array::from_fn(|i| {
                let offset = i as f32 - (PENDULUM_COUNT as f32 - 1.0) * 0.5;
                Pendulum {
                    anchor: Vec2::new(offset * COLLISION_DISTANCE, ANCHOR_Y),
                    angle: 0.0,
                    angular_vel: 0.0,
                    length: PENDULUM_LENGTH,
                    mass: BOB_MASS,
                    bob_radius: BOB_RADIUS,
                    color: Color::SILVER,
                    held: false,
                }
            }),
            gravity: CRADLE_GRAVITY,
        }
    }

    pub fn pendulums(&self) -> &[Pendulum] {
        &self.pendulums
    }

    /// Set a single pendulum's swing state
    pub fn set_state(&mut self, index: usize, angle: f32, angular_vel: f32) {
        if let Some(p) = self.pendulums.get_mut(index) {
            p.angle = angle;
            p.angular_vel = angular_vel;
        }
    }

    /// Bring every pendulum to rest at the bottom, keeping the geometry
    pub fn reset(&mut self) {
        for p in &mut self.pendulums {
            p.angle = 0.0;
            p.angular_vel = 0.0;
            p.held = false;
        }
        debug!("cradle reset");
    }

    /// Index of the bob under `point`, if any
    pub fn pick(&self, point: Vec2) -> Option<usize> {
        self.pendulums
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.bob_position().distance(point)))
            .filter(|&(_, dist)| dist <= PICK_DISTANCE)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Pull back pendulums `0..=index` to the release angle, at rest
    pub fn pull_back(&mut self, index: usize) {
        let last = index.min(PENDULUM_COUNT - 1);
        for p in &mut self.pendulums[..=last] {
            p.angle = PULL_BACK_ANGLE;
            p.angular_vel = 0.0;
            p.held = true;
        }
        debug!(count = last + 1, "pendulums pulled back");
    }

    /// Pull back the bob under `point` and everything to its left.
    /// Returns whether a bob was hit.
    pub fn pull_back_at(&mut self, point: Vec2) -> bool {
        match self.pick(point) {
            Some(index) => {
                self.pull_back(index);
                true
            }
            None => false,
        }
    }

    /// Advance one fixed tick
    pub fn update(&mut self) {
        for p in &mut self.pendulums {
            p.angular_vel *= ANGULAR_DAMPING;
            p.angular_vel -= self.gravity * p.angle.sin() / p.length;
            p.angle += p.angular_vel;
        }

        for i in 0..PENDULUM_COUNT - 1 {
            let (head, tail) = self.pendulums.split_at_mut(i + 1);
            resolve_pendulum_pair(&mut head[i], &mut tail[0]);
        }
    }
}

impl Default for NewtonsCradle {
    fn default() -> Self {
        Self::new()
    }
}

/// Swap angular velocities of two approaching bobs in contact and push them
/// apart. Returns whether an impact happened.
pub fn resolve_pendulum_pair(a: &mut Pendulum, b: &mut Pendulum) -> bool {
    let pa = a.bob_position();
    let pb = b.bob_position();
    let Some((normal, dist)) = contact_normal(pa, pb) else {
        return false;
    };
    if dist >= COLLISION_DISTANCE {
        return false;
    }

    let approach = (b.bob_velocity() - a.bob_velocity()).dot(normal);
    if approach >= 0.0 {
        return false;
    }

    std::mem::swap(&mut a.angular_vel, &mut b.angular_vel);

    let correction = normal * ((COLLISION_DISTANCE - dist) * 0.5);
    a.set_angle_from_bob_x((pa - correction).x);
    b.set_angle_from_bob_x((pb + correction).x);

    true
}
