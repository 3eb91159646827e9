//! Screen selection and the per-tick entry point.

use crate::balls::BallSim;
use crate::color::Color;
use crate::config::DemoConfig;
use crate::cradle::NewtonsCradle;
use crate::error::DemoError;
use crate::fluid::FluidSim;
use crate::input::InputEvent;
use crate::layout;
use crate::render::{self, RenderModel};
use crate::squares::SquareSim;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

const STATUS_POS: Vec2 = Vec2::new(0.0, -0.7);
const STATUS_LINE_HEIGHT: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Balls,
    Squares,
    Cradle,
    Fluid,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Balls,
        DemoKind::Squares,
        DemoKind::Cradle,
        DemoKind::Fluid,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Balls => "Bouncing Balls",
            DemoKind::Squares => "Colliding Squares",
            DemoKind::Cradle => "Newton's Cradle",
            DemoKind::Fluid => "Fluid Flow",
        }
    }

    /// Menu button color, also tints the demo background
    pub fn color(self) -> Color {
        match self {
            DemoKind::Balls => Color::RED,
            DemoKind::Squares => Color::BLUE,
            DemoKind::Cradle => Color::GREEN,
            DemoKind::Fluid => Color::YELLOW,
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "balls" | "ball" => Ok(DemoKind::Balls),
            "squares" | "square" => Ok(DemoKind::Squares),
            "cradle" | "newton" => Ok(DemoKind::Cradle),
            "fluid" | "flow" => Ok(DemoKind::Fluid),
            _ => Err(DemoError::UnknownDemo(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Demo(DemoKind),
}

/// All four demos plus the active screen.
///
/// Every demo keeps its state while another screen is shown, so leaving a
/// demo pauses it. Only explicit reset or parameter events reinitialize.
#[derive(Debug, Clone)]
pub struct DemoSuite {
    screen: Screen,
    pub balls: BallSim,
    pub squares: SquareSim,
    pub cradle: NewtonsCradle,
    pub fluid: FluidSim,
    exit_requested: bool,
}

impl DemoSuite {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            screen: config.start_screen,
            balls: BallSim::new(config.ball_count, config.seed),
            squares: SquareSim::new(config.mass_ratio),
            cradle: NewtonsCradle::new(),
            fluid: FluidSim::new(config.obstacle, config.stream_speed, config.seed),
            exit_requested: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Apply one input event, advance the active demo one tick, and
    /// return what to draw
    pub fn step(&mut self, event: InputEvent) -> RenderModel {
        self.apply(event);
        self.advance();
        self.render()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Tick => {}
            InputEvent::Click(point) => {
                if let Some(bound) = layout::hit_test(self.screen, point) {
                    self.apply(bound);
                } else if self.screen == Screen::Demo(DemoKind::Cradle) {
                    self.cradle.pull_back_at(point);
                }
            }
            InputEvent::Escape => match self.screen {
                Screen::MainMenu => {
                    info!("exit requested");
                    self.exit_requested = true;
                }
                Screen::Demo(_) => self.switch_to(Screen::MainMenu),
            },
            InputEvent::Back => self.switch_to(Screen::MainMenu),
            InputEvent::Open(kind) => self.switch_to(Screen::Demo(kind)),
            InputEvent::SetBallCount(count) => self.balls.init_balls(count),
            InputEvent::SetMassRatio(ratio) => {
                self.squares.init_square_masses(ratio);
                self.squares.reset_squares();
            }
            InputEvent::SetObstacle(shape) => self.fluid.set_obstacle(shape),
            InputEvent::AdjustStreamSpeed(steps) => self.fluid.adjust_stream_speed(steps),
            InputEvent::Reset => self.reset_active(),
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        if self.screen != screen {
            info!(from = ?self.screen, to = ?screen, "screen changed");
            self.screen = screen;
        }
    }

    /// Put the active demo back into its canonical state
    pub fn reset_active(&mut self) {
        let Screen::Demo(kind) = self.screen else {
            return;
        };
        match kind {
            DemoKind::Balls => self.balls.init_balls(self.balls.count()),
            DemoKind::Squares => self.squares.reset_squares(),
            DemoKind::Cradle => self.cradle.reset(),
            DemoKind::Fluid => self.fluid.reset(),
        }
        debug!(demo = %kind, "demo reset");
    }

    /// Run the active demo's update once; the menu and inactive demos stay put
    pub fn advance(&mut self) {
        match self.screen {
            Screen::MainMenu => {}
            Screen::Demo(DemoKind::Balls) => self.balls.update(),
            Screen::Demo(DemoKind::Squares) => self.squares.update(),
            Screen::Demo(DemoKind::Cradle) => self.cradle.update(),
            Screen::Demo(DemoKind::Fluid) => self.fluid.update(),
        }
    }

    pub fn render(&self) -> RenderModel {
        let mut model = match self.screen {
            Screen::MainMenu => {
                let mut model = RenderModel::new(self.screen, Color::BLACK);
                for button in layout::menu_buttons() {
                    model.button(&button);
                }
                model
            }
            Screen::Demo(kind) => {
                let mut model = RenderModel::new(self.screen, kind.color().scaled(0.12));
                match kind {
                    DemoKind::Balls => render::draw_balls(&self.balls, &mut model),
                    DemoKind::Squares => render::draw_squares(&self.squares, &mut model),
                    DemoKind::Cradle => render::draw_cradle(&self.cradle, &mut model),
                    DemoKind::Fluid => render::draw_fluid(&self.fluid, &mut model),
                }
                for button in layout::buttons(self.screen) {
                    model.button(&button);
                }
                for (i, line) in self.status_lines(kind).into_iter().enumerate() {
                    let pos = STATUS_POS - Vec2::new(0.0, i as f32 * STATUS_LINE_HEIGHT);
                    model.label(pos, line, Color::WHITE);
                }
                model
            }
        };
        model.exit_requested = self.exit_requested;
        model
    }

    /// Human-readable summary of a demo's current state
    pub fn status_lines(&self, kind: DemoKind) -> Vec<String> {
        match kind {
            DemoKind::Balls => {
                let energy: f32 = self
                    .balls
                    .balls()
                    .iter()
                    .map(|b| 0.5 * b.vel.length_squared())
                    .sum();
                vec![
                    format!("{} balls", self.balls.balls().len()),
                    format!("kinetic energy {:.3e}", energy),
                ]
            }
            DemoKind::Squares => {
                let [a, b] = self.squares.squares();
                vec![
                    format!("mass ratio {} (A = {}, B = {})", self.squares.ratio(), a.mass, b.mass),
                    format!("vA = {:+.5}, vB = {:+.5}", a.vel.x, b.vel.x),
                ]
            }
            DemoKind::Cradle => {
                let angles: Vec<String> = self
                    .cradle
                    .pendulums()
                    .iter()
                    .map(|p| format!("{:+.2}", p.angle))
                    .collect();
                vec![
                    "click a ball to pull it back".to_string(),
                    format!("angles [{}]", angles.join(", ")),
                ]
            }
            DemoKind::Fluid => {
                let (laminar, turbulent) = self.fluid.regime_counts();
                vec![
                    format!(
                        "{} obstacle, stream speed {:.3}{}",
                        self.fluid.obstacle().shape,
                        self.fluid.stream_speed(),
                        if self.fluid.is_turbulent() { " (turbulent)" } else { "" }
                    ),
                    format!(
                        "{} particles: {} laminar, {} turbulent",
                        self.fluid.active_count(),
                        laminar,
                        turbulent
                    ),
                ]
            }
        }
    }
}

impl Default for DemoSuite {
    fn default() -> Self {
        Self::new(&DemoConfig::default())
    }
}
