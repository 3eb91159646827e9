pub mod balls;
pub mod bounds;
pub mod color;
pub mod config;
pub mod cradle;
pub mod error;
pub mod fluid;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod squares;
pub mod suite;

pub use balls::{Ball, BallCount, BallSim};
pub use bounds::{Bounds, BOX_BOTTOM, BOX_LEFT, BOX_RIGHT, BOX_TOP};
pub use color::Color;
pub use config::DemoConfig;
pub use cradle::{NewtonsCradle, Pendulum};
pub use error::DemoError;
pub use fluid::{FlowRegime, FluidParticle, FluidSim, Obstacle, ObstacleShape, MAX_FLUID_PARTICLES};
pub use input::{InputEvent, Viewport};
pub use render::{Label, RenderModel, Renderer, Shape};
pub use squares::{MassRatio, Square, SquareSim};
pub use suite::{DemoKind, DemoSuite, Screen};
