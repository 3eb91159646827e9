//! Input events delivered by the host and pixel/world coordinate mapping.

use crate::balls::BallCount;
use crate::fluid::ObstacleShape;
use crate::squares::MassRatio;
use crate::suite::DemoKind;
use glam::Vec2;

/// One input signal per tick. `Tick` means nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputEvent {
    #[default]
    Tick,
    /// Left click in world coordinates
    Click(Vec2),
    Escape,
    Back,
    Open(DemoKind),
    SetBallCount(BallCount),
    SetMassRatio(MassRatio),
    SetObstacle(ObstacleShape),
    /// Change the fluid stream speed by this many steps
    AdjustStreamSpeed(i32),
    Reset,
}

/// Window size in pixels.
///
/// World space spans [-1, 1] on the shorter window axis and is centered;
/// both axes share one scale so circles stay round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f32 {
        (self.width.min(self.height) * 0.5).max(f32::EPSILON)
    }

    fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Pixel position (origin top-left, y down) to world coordinates
    pub fn to_world(&self, pixel: Vec2) -> Vec2 {
        let offset = (pixel - self.center()) / self.scale();
        Vec2::new(offset.x, -offset.y)
    }

    /// World coordinates to pixel position
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.center() + Vec2::new(world.x, -world.y) * self.scale()
    }
}
