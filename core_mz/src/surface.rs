//! [`Surface`] is the 2D drawing context the renderers paint onto

use ecolor::Color32;

/// A pixel-addressed 2D drawing context with stroked paths and filled rectangles
///
/// Mirrors the subset of an HTML canvas 2D context that maze rendering needs
pub trait Surface {
    /// Size the drawing area in pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Discard the current path
    fn begin_path(&mut self);

    fn set_stroke_color(&mut self, color: Color32);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Draw every line added since [`Surface::begin_path`] with the stroke color
    fn stroke(&mut self);

    fn set_fill_color(&mut self, color: Color32);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Accumulates `move_to`/`line_to` calls into line segments for surfaces without native paths
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    cursor: Option<(f64, f64)>,
    segments: Vec<[(f64, f64); 2]>,
}

impl PathBuilder {
    pub fn clear(&mut self) {
        self.cursor = None;
        self.segments.clear();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    /// Without a preceding `move_to` this only sets the start point, like a canvas does
    pub fn line_to(&mut self, x: f64, y: f64) {
        if let Some(from) = self.cursor {
            self.segments.push([from, (x, y)]);
        }
        self.cursor = Some((x, y));
    }

    pub fn segments(&self) -> &[[(f64, f64); 2]] {
        &self.segments
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize {
        width: u32,
        height: u32,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color32,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color32,
    },
}

/// A [`Surface`] that remembers what was drawn instead of showing it
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    path: PathBuilder,
    stroke_color: Color32,
    fill_color: Color32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.path.clear();
    }

    /// The last size given to [`Surface::resize`]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Resize { width, height } => Some((*width, *height)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&(f64, f64), &(f64, f64), &Color32)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    /// Color of the last rectangle filled over the pixel at `(x, y)`
    pub fn fill_color_at(&self, x: u32, y: u32) -> Option<Color32> {
        let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } if px >= *x && py >= *y && px < x + width && py < y + height => Some(*color),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(x, y);
    }

    fn stroke(&mut self) {
        for [from, to] in self.path.segments() {
            self.commands.push(DrawCommand::Line {
                from: *from,
                to: *to,
                color: self.stroke_color,
            });
        }
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: self.fill_color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_draws_current_path() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color(Color32::RED);
        surface.begin_path();
        surface.line_to(5.0, 5.0);
        surface.move_to(0.0, 0.0);
        surface.line_to(10.0, 0.0);
        surface.line_to(10.0, 10.0);
        surface.stroke();
        assert_eq!(surface.lines().count(), 2);
        assert!(surface.lines().all(|(_, _, color)| *color == Color32::RED));

        // stroking again without begin_path repeats the same path
        surface.stroke();
        assert_eq!(surface.lines().count(), 4);

        surface.begin_path();
        surface.stroke();
        assert_eq!(surface.lines().count(), 4);
    }

    #[test]
    fn later_fills_cover_earlier_ones() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_color(Color32::WHITE);
        surface.fill_rect(0.0, 0.0, 10.0, 10.0);
        surface.set_fill_color(Color32::BLACK);
        surface.fill_rect(2.0, 2.0, 2.0, 2.0);

        assert_eq!(surface.fill_color_at(0, 0), Some(Color32::WHITE));
        assert_eq!(surface.fill_color_at(3, 3), Some(Color32::BLACK));
        assert_eq!(surface.fill_color_at(4, 4), Some(Color32::WHITE));
        assert_eq!(surface.fill_color_at(10, 0), None);
        assert_eq!(surface.fill_count(), 2);
    }

    #[test]
    fn size_is_last_resize() {
        let mut surface = RecordingSurface::new();
        assert_eq!(surface.size(), None);
        surface.resize(3, 4);
        surface.resize(33, 25);
        assert_eq!(surface.size(), Some((33, 25)));
    }
}
