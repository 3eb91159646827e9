//! Two squares sliding along the x axis with mass-weighted elastic impacts.

use crate::bounds::Bounds;
use crate::color::Color;
use crate::error::DemoError;
use glam::Vec2;
use std::fmt;
use tracing::debug;

/// Multiplier applied to square velocity every tick (1.0 = no damping)
pub const SQUARE_DAMPING: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side length
    pub size: f32,
    pub mass: f32,
    pub color: Color,
}

impl Square {
    pub fn half_size(&self) -> f32 {
        self.size * 0.5
    }
}

/// Mass of square B relative to square A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassRatio {
    #[default]
    One,
    Ten,
    Hundred,
}

impl MassRatio {
    pub const ALL: [MassRatio; 3] = [MassRatio::One, MassRatio::Ten, MassRatio::Hundred];

    pub fn get(self) -> f32 {
        match self {
            MassRatio::One => 1.0,
            MassRatio::Ten => 10.0,
            MassRatio::Hundred => 100.0,
        }
    }
}

impl TryFrom<u32> for MassRatio {
    type Error = DemoError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MassRatio::One),
            10 => Ok(MassRatio::Ten),
            100 => Ok(MassRatio::Hundred),
            other => Err(DemoError::InvalidMassRatio(other)),
        }
    }
}

impl fmt::Display for MassRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.get())
    }
}

/// State of the square demo
#[derive(Debug, Clone)]
pub struct SquareSim {
    pub bounds: Bounds,
    squares: [Square; 2],
    ratio: MassRatio,
}

impl SquareSim {
    pub fn new(ratio: MassRatio) -> Self {
        let mut sim = Self {
            bounds: Bounds::default(),
            squares: canonical_squares(),
            ratio,
        };
        sim.init_square_masses(ratio);
        sim
    }

    /// Build a simulation from explicit bodies
    pub fn from_squares(a: Square, b: Square) -> Self {
        Self {
            bounds: Bounds::default(),
            squares: [a, b],
            ratio: MassRatio::One,
        }
    }

    pub fn squares(&self) -> &[Square; 2] {
        &self.squares
    }

    pub fn ratio(&self) -> MassRatio {
        self.ratio
    }

    /// Square A keeps unit mass; square B takes the ratio
    pub fn init_square_masses(&mut self, ratio: MassRatio) {
        self.ratio = ratio;
        self.squares[0].mass = 1.0;
        self.squares[1].mass = ratio.get();
        debug!(ratio = ratio.get(), "square masses set");
    }

    /// Restore canonical positions, velocities, sizes and colors.
    /// Masses are left as they are.
    pub fn reset_squares(&mut self) {
        for (square, canonical) in self.squares.iter_mut().zip(canonical_squares()) {
            *square = Square {
                mass: square.mass,
                ..canonical
            };
        }
        debug!("squares reset");
    }

    /// Advance one fixed tick
    pub fn update(&mut self) {
        for square in &mut self.squares {
            square.vel *= SQUARE_DAMPING;
            square.pos += square.vel;
            let half = square.half_size();
            self.bounds.reflect(&mut square.pos, &mut square.vel, half);
        }

        let [a, b] = &mut self.squares;
        if resolve_square_pair(a, b) {
            for square in &mut self.squares {
                let half = square.half_size();
                self.bounds.clamp(&mut square.pos, half);
            }
        }
    }
}

fn canonical_squares() -> [Square; 2] {
    [
        Square {
            pos: Vec2::new(-0.5, 0.0),
            vel: Vec2::new(0.006, 0.0),
            size: 0.1,
            mass: 1.0,
            color: Color::rgb(0.9, 0.3, 0.3),
        },
        Square {
            pos: Vec2::new(0.2, 0.0),
            vel: Vec2::ZERO,
            size: 0.16,
            mass: 1.0,
            color: Color::rgb(0.3, 0.5, 0.9),
        },
    ]
}

/// 1D elastic collision along x.
///
/// Only approaching pairs are resolved, so a pair still overlapping after an
/// impact is not hit again. Returns whether velocities were exchanged.
pub fn resolve_square_pair(a: &mut Square, b: &mut Square) -> bool {
    let min_dist = a.half_size() + b.half_size();
    let dx = b.pos.x - a.pos.x;
    let dy = b.pos.y - a.pos.y;
    if dx.abs() >= min_dist || dy.abs() >= min_dist {
        return false;
    }

    // Positive when b moves away from a along the line between them
    let direction = if dx >= 0.0 { 1.0 } else { -1.0 };
    let separating = (b.vel.x - a.vel.x) * direction;
    if separating > 0.0 {
        return false;
    }

    let correction = (min_dist - dx.abs()) * 0.5 * direction;
    a.pos.x -= correction;
    b.pos.x += correction;

    let (v1, v2) = elastic_1d(a.mass, a.vel.x, b.mass, b.vel.x);
    a.vel.x = v1;
    b.vel.x = v2;

    true
}

/// Post-impact velocities of a 1D elastic collision
pub fn elastic_1d(m1: f32, v1: f32, m2: f32, v2: f32) -> (f32, f32) {
    let total = m1 + m2;
    (
        ((m1 - m2) * v1 + 2.0 * m2 * v2) / total,
        ((m2 - m1) * v2 + 2.0 * m1 * v1) / total,
    )
}
