//! Interactive window for the demo suite.
//!
//! Each repaint feeds at most one input event to the suite, advances the
//! active demo one tick and paints the returned model.

use eframe::egui;
use physdemo_core::{
    Color, DemoConfig, DemoSuite, InputEvent, RenderModel, Renderer, Shape, Viewport,
};
use std::collections::VecDeque;
use tracing::{debug, info};

const LABEL_FONT_SIZE: f32 = 14.0;
const LINE_WIDTH: f32 = 1.5;

pub struct DemoApp {
    suite: DemoSuite,
    pending: VecDeque<InputEvent>,
    closing: bool,
}

impl DemoApp {
    pub fn new(config: DemoConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            suite: DemoSuite::new(&config),
            pending: VecDeque::new(),
            closing: false,
        }
    }

    fn collect_input(&mut self, ctx: &egui::Context, response: &egui::Response, viewport: &Viewport) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.pending.push_back(InputEvent::Escape);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - response.rect.min;
                let world = viewport.to_world(glam::Vec2::new(local.x, local.y));
                debug!(x = world.x, y = world.y, "click");
                self.pending.push_back(InputEvent::Click(world));
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.allocate_rect(rect, egui::Sense::click());
                let viewport = Viewport::new(rect.width(), rect.height());

                self.collect_input(ctx, &response, &viewport);

                let event = self.pending.pop_front().unwrap_or_default();
                let model = self.suite.step(event);

                let mut renderer = EguiRenderer {
                    painter: ui.painter_at(rect),
                    origin: rect.min,
                    viewport,
                };
                renderer.draw(&model);

                if model.exit_requested && !self.closing {
                    info!("closing window");
                    self.closing = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

        // Fixed step per frame: keep frames coming
        ctx.request_repaint();
    }
}

/// Paints a [`RenderModel`] with an egui painter
struct EguiRenderer {
    painter: egui::Painter,
    origin: egui::Pos2,
    viewport: Viewport,
}

impl EguiRenderer {
    fn to_screen(&self, world: glam::Vec2) -> egui::Pos2 {
        let local = self.viewport.to_screen(world);
        self.origin + egui::vec2(local.x, local.y)
    }
}

impl Renderer for EguiRenderer {
    fn draw(&mut self, model: &RenderModel) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, to_color32(model.clear_color));

        let scale = self.viewport.scale();
        for shape in &model.shapes {
            match shape {
                Shape::Rect { min, size, color } => {
                    let rect = egui::Rect::from_two_pos(
                        self.to_screen(*min),
                        self.to_screen(*min + *size),
                    );
                    self.painter.rect_filled(rect, 0.0, to_color32(*color));
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.painter
                        .circle_filled(self.to_screen(*center), radius * scale, to_color32(*color));
                }
                Shape::Polygon { points, color } => {
                    let points = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter.add(egui::Shape::convex_polygon(
                        points,
                        to_color32(*color),
                        egui::Stroke::NONE,
                    ));
                }
                Shape::Line { from, to, color } => {
                    self.painter.line_segment(
                        [self.to_screen(*from), self.to_screen(*to)],
                        egui::Stroke::new(LINE_WIDTH, to_color32(*color)),
                    );
                }
            }
        }

        for label in &model.labels {
            self.painter.text(
                self.to_screen(label.pos),
                egui::Align2::CENTER_CENTER,
                &label.text,
                egui::FontId::proportional(LABEL_FONT_SIZE),
                to_color32(label.color),
            );
        }
    }
}

fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b] = color.to_rgb8();
    egui::Color32::from_rgb(r, g, b)
}
