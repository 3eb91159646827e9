//! Button regions for the menu and the demo screens.

use crate::balls::BallCount;
use crate::color::Color;
use crate::fluid::ObstacleShape;
use crate::input::InputEvent;
use crate::squares::MassRatio;
use crate::suite::{DemoKind, Screen};
use glam::Vec2;

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub color: Color,
    pub label: String,
    pub event: InputEvent,
}

impl Button {
    fn new(rect: Rect, color: Color, label: impl Into<String>, event: InputEvent) -> Self {
        Self {
            rect,
            color,
            label: label.into(),
            event,
        }
    }
}

pub const BACK_BUTTON: Rect = Rect::new(-0.95, 0.8, 0.3, 0.12);

const OPTION_ROW_Y: f32 = 0.65;
const OPTION_WIDTH: f32 = 0.22;
const OPTION_HEIGHT: f32 = 0.1;
const OPTION_GAP: f32 = 0.04;
const OPTION_COLOR: Color = Color::rgb(0.25, 0.25, 0.3);
const RESET_COLOR: Color = Color::rgb(0.45, 0.2, 0.2);

/// The four demo buttons stacked in the middle of the menu
pub fn menu_buttons() -> Vec<Button> {
    DemoKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let y = 0.3 - i as f32 * 0.25;
            Button::new(
                Rect::new(-0.3, y, 0.6, 0.15),
                kind.color(),
                kind.title(),
                InputEvent::Open(kind),
            )
        })
        .collect()
}

pub fn back_button() -> Button {
    Button::new(BACK_BUTTON, Color::DARK_GRAY, "Back", InputEvent::Back)
}

/// Parameter buttons above the box, left to right
pub fn option_buttons(kind: DemoKind) -> Vec<Button> {
    let mut entries: Vec<(String, InputEvent, Color)> = Vec::new();
    match kind {
        DemoKind::Balls => {
            for count in BallCount::ALL {
                entries.push((
                    format!("{} balls", count),
                    InputEvent::SetBallCount(count),
                    OPTION_COLOR,
                ));
            }
        }
        DemoKind::Squares => {
            for ratio in MassRatio::ALL {
                entries.push((
                    format!("Mass {}", ratio),
                    InputEvent::SetMassRatio(ratio),
                    OPTION_COLOR,
                ));
            }
        }
        DemoKind::Cradle => {}
        DemoKind::Fluid => {
            for shape in ObstacleShape::ALL {
                entries.push((
                    capitalize(shape.name()),
                    InputEvent::SetObstacle(shape),
                    OPTION_COLOR,
                ));
            }
            entries.push(("Slower".into(), InputEvent::AdjustStreamSpeed(-1), OPTION_COLOR));
            entries.push(("Faster".into(), InputEvent::AdjustStreamSpeed(1), OPTION_COLOR));
        }
    }
    entries.push(("Reset".into(), InputEvent::Reset, RESET_COLOR));

    let row_width = entries.len() as f32 * (OPTION_WIDTH + OPTION_GAP) - OPTION_GAP;
    let start_x = -row_width * 0.5;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, event, color))| {
            let x = start_x + i as f32 * (OPTION_WIDTH + OPTION_GAP);
            Button::new(
                Rect::new(x, OPTION_ROW_Y, OPTION_WIDTH, OPTION_HEIGHT),
                color,
                label,
                event,
            )
        })
        .collect()
}

/// Every button visible on `screen`
pub fn buttons(screen: Screen) -> Vec<Button> {
    match screen {
        Screen::MainMenu => menu_buttons(),
        Screen::Demo(kind) => {
            let mut all = vec![back_button()];
            all.extend(option_buttons(kind));
            all
        }
    }
}

/// Event bound to the button under `point`, if any
pub fn hit_test(screen: Screen, point: Vec2) -> Option<InputEvent> {
    buttons(screen)
        .into_iter()
        .find(|b| b.rect.contains(point))
        .map(|b| b.event)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
