//! Startup parameters for the demo suite.

use crate::balls::BallCount;
use crate::fluid::{ObstacleShape, DEFAULT_STREAM_SPEED};
use crate::squares::MassRatio;
use crate::suite::Screen;

/// Initial parameters for every demo.
///
/// # Builder Pattern
/// ```
/// use physdemo_core::config::DemoConfig;
/// use physdemo_core::{BallCount, ObstacleShape};
///
/// let config = DemoConfig::new()
///     .with_seed(7)
///     .with_ball_count(BallCount::Ten)
///     .with_obstacle(ObstacleShape::Airfoil);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Seed for ball placement and fluid spawning. Default: 42.
    pub seed: u64,
    /// Default: 5.
    pub ball_count: BallCount,
    /// Default: 1:1.
    pub mass_ratio: MassRatio,
    /// Default: circle.
    pub obstacle: ObstacleShape,
    /// Fluid inflow speed in world units per tick. Default: 0.005.
    pub stream_speed: f32,
    /// Screen shown first. Default: main menu.
    pub start_screen: Screen,
}

impl DemoConfig {
    pub fn new() -> Self {
        DemoConfig {
            seed: 42,
            ball_count: BallCount::default(),
            mass_ratio: MassRatio::default(),
            obstacle: ObstacleShape::default(),
            stream_speed: DEFAULT_STREAM_SPEED,
            start_screen: Screen::MainMenu,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ball_count(mut self, count: BallCount) -> Self {
        self.ball_count = count;
        self
    }

    pub fn with_mass_ratio(mut self, ratio: MassRatio) -> Self {
        self.mass_ratio = ratio;
        self
    }

    pub fn with_obstacle(mut self, shape: ObstacleShape) -> Self {
        self.obstacle = shape;
        self
    }

    pub fn with_stream_speed(mut self, speed: f32) -> Self {
        self.stream_speed = speed;
        self
    }

    pub fn with_start_screen(mut self, screen: Screen) -> Self {
        self.start_screen = screen;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}
