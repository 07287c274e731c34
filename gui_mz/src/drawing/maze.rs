use crate::app::App;
use crate::colors::{HOVERED_CELL_COLOR, RENDER_ERROR_COLOR};
use core_mz::surface::{PathBuilder, Surface};
use eframe::egui;
use eframe::egui::{Color32, Painter, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use log::error;

/// A [`Surface`] that paints through egui, with `(0, 0)` at `origin`
pub struct PainterSurface {
    painter: Painter,
    origin: Pos2,
    path: PathBuilder,
    stroke: Stroke,
    fill: Color32,
}

impl PainterSurface {
    pub fn new(painter: Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            path: PathBuilder::default(),
            stroke: Stroke::new(1.0, Color32::GRAY),
            fill: Color32::WHITE,
        }
    }

    fn map_point(&self, (x, y): (f64, f64)) -> Pos2 {
        self.origin + Vec2::new(x as f32, y as f32)
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }
}

impl Surface for PainterSurface {
    /// Nothing outside of the canvas area is drawn
    fn resize(&mut self, width: u32, height: u32) {
        let canvas = Rect::from_min_size(self.origin, Vec2::new(width as f32, height as f32));
        let clip = self.painter.clip_rect().intersect(canvas);
        self.painter.set_clip_rect(clip);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke.color = color;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    fn stroke(&mut self) {
        for [from, to] in self.path.segments() {
            self.painter
                .line_segment([self.map_point(*from), self.map_point(*to)], self.stroke);
        }
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = Rect::from_min_size(
            self.map_point((x, y)),
            Vec2::new(width as f32, height as f32),
        );
        self.painter.rect_filled(rect, Rounding::ZERO, self.fill);
    }
}

/// Draw one frame of the maze, sized to its canvas, inside a scroll area
pub fn draw_maze(app: &mut App, ui: &mut Ui) {
    if let Some(e) = &app.render_error {
        ui.colored_label(RENDER_ERROR_COLOR, format!("Rendering stopped: {e}"));
        return;
    }

    let layout = *app.render_loop.renderer().layout();
    let (width, height) = layout.canvas_size();

    egui::ScrollArea::both().show(ui, |ui| {
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width as f32, height as f32), Sense::hover());
        let origin = response.rect.min;

        let mut surface = PainterSurface::new(painter, origin);
        app.render_loop.prepare(&mut surface);
        if let Err(e) = app.render_loop.frame(&app.maze, &mut surface) {
            error!("Render loop stopped: {e:?}");
            app.render_error = Some(e.to_string());
            return;
        }

        app.hovered_cell = response.hover_pos().and_then(|pos| {
            let offset = pos - origin;
            if offset.x < 0.0 || offset.y < 0.0 {
                return None;
            }
            layout.cell_at_pixel(offset.x as u32, offset.y as u32)
        });

        if let Some((row, col)) = app.hovered_cell {
            let rect = layout.cell_rect(row, col);
            surface.painter().rect_stroke(
                Rect::from_min_size(
                    origin + Vec2::new(rect.x as f32, rect.y as f32),
                    Vec2::new(rect.width as f32, rect.height as f32),
                ),
                Rounding::ZERO,
                Stroke::new(1.0, HOVERED_CELL_COLOR),
            );
        }
    });
}
