//! Draws a [`MazeSource`] onto a [`Surface`], one frame at a time
//!
//! [`MazeRenderer`] paints grid lines and cells; [`RenderLoop`] runs one full frame per call
//! and keeps timing statistics. Scheduling the next frame is left to the caller.

use crate::cell::Cell;
use crate::constants::FRAMES_PER_REPORT;
use crate::geometry::GridLayout;
use crate::maze::MazeSource;
use crate::settings::{Palette, RenderSettings};
use crate::surface::Surface;
use crate::util::stopwatch::Stopwatch;
use crate::util::{ColoredStatus, WebTimeInstant};
use anyhow::{bail, Error};
use log::{debug, info, warn};
use std::time::Duration;

/// Paints a maze of a fixed size with a fixed palette
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MazeRenderer {
    layout: GridLayout,
    palette: Palette,
}

impl MazeRenderer {
    pub fn new(layout: GridLayout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    pub fn for_maze<M: MazeSource + ?Sized>(
        maze: &M,
        settings: &RenderSettings,
    ) -> Result<Self, Error> {
        Ok(Self::new(
            GridLayout::for_maze(maze, settings.cell_size)?,
            settings.palette,
        ))
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Colors take effect from the next stroke or fill
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Size the surface to fit the whole grid
    pub fn resize<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (width, height) = self.layout.canvas_size();
        surface.resize(width, height);
    }

    /// Stroke `width + 1` vertical and `height + 1` horizontal lines as one path
    pub fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        surface.set_stroke_color(self.palette.grid);

        for line in self.layout.vertical_lines().chain(self.layout.horizontal_lines()) {
            surface.move_to(line.from.0 as f64, line.from.1 as f64);
            surface.line_to(line.to.0 as f64, line.to.1 as f64);
        }

        surface.stroke();
    }

    /// Fill every cell square: the wall color for [`Cell::Wall`] bytes, the passage color for anything else
    pub fn draw_cells<S: Surface + ?Sized>(&self, surface: &mut S, cells: &[u8]) -> Result<(), Error> {
        if cells.len() != self.layout.cell_count() {
            bail!(
                "Cell buffer has {} bytes, expected {} for a {}x{} maze",
                cells.len(),
                self.layout.cell_count(),
                self.layout.width(),
                self.layout.height()
            );
        }

        surface.begin_path();

        for row in 0..self.layout.height() {
            for col in 0..self.layout.width() {
                let byte = cells[self.layout.index(row, col)];
                surface.set_fill_color(if Cell::byte_is_wall(byte) {
                    self.palette.wall
                } else {
                    self.palette.passage
                });

                let rect = self.layout.cell_rect(row, col);
                surface.fill_rect(
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            }
        }

        Ok(())
    }
}

/// One frame of grid lines followed by cells, timed
pub struct RenderLoop {
    renderer: MazeRenderer,
    stopwatch: Stopwatch<2, 60, WebTimeInstant>,
    frames: u64,
}

impl RenderLoop {
    pub fn new(renderer: MazeRenderer) -> Self {
        info!(
            "Render loop ready for a {}x{} maze at {}px per cell",
            renderer.layout.width(),
            renderer.layout.height(),
            renderer.layout.cell_size()
        );
        Self {
            renderer,
            stopwatch: Stopwatch::new(
                "Render",
                Duration::from_millis(8),
                Duration::from_millis(16),
                0.8,
                0.9,
            ),
            frames: 0,
        }
    }

    pub fn renderer(&self) -> &MazeRenderer {
        &self.renderer
    }

    /// Swap colors without resetting the frame count or timings
    pub fn set_palette(&mut self, palette: Palette) {
        self.renderer.set_palette(palette);
    }

    pub fn stopwatch(&self) -> &Stopwatch<2, 60, WebTimeInstant> {
        &self.stopwatch
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Size the surface; call once before the first frame
    pub fn prepare<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer.resize(surface);
    }

    /// Draw one complete frame, reading the cell buffer again
    ///
    /// An error means the maze no longer matches what this loop was built for, and
    /// the loop should not be scheduled again
    pub fn frame<M: MazeSource + ?Sized, S: Surface + ?Sized>(
        &mut self,
        maze: &M,
        surface: &mut S,
    ) -> Result<(), Error> {
        let layout = self.renderer.layout;
        if (maze.width(), maze.height()) != (layout.width(), layout.height()) {
            bail!(
                "Maze changed size from {}x{} to {}x{}",
                layout.width(),
                layout.height(),
                maze.width(),
                maze.height()
            );
        }

        self.stopwatch.start();
        self.renderer.draw_grid(surface);
        self.stopwatch
            .mark_completed("Draw grid")
            .map_err(Error::msg)?;
        self.renderer.draw_cells(surface, maze.cells())?;
        self.stopwatch
            .mark_completed("Draw cells")
            .map_err(Error::msg)?;

        self.frames += 1;
        if self.frames % FRAMES_PER_REPORT == 0 {
            self.report();
        }
        Ok(())
    }

    fn report(&self) {
        let status = self.stopwatch.status();
        let message = status.message().unwrap_or_default();
        match status {
            ColoredStatus::Warn(_) | ColoredStatus::Error(_) => {
                warn!("Frame {} is slow: {}", self.frames, message)
            }
            _ => debug!(
                "Frame {}: {} ({:.1} fps)",
                self.frames,
                message,
                self.stopwatch.utilization().hz()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;
    use crate::surface::RecordingSurface;
    use ecolor::Color32;

    fn scenario() -> (Maze, MazeRenderer) {
        let mut cells = vec![u8::from(Cell::Space); 12];
        cells[5] = Cell::WALL_BYTE;
        let maze = Maze::from_bytes(4, 3, cells).unwrap();
        let renderer = MazeRenderer::new(GridLayout::new(4, 3, 7).unwrap(), Palette::default());
        (maze, renderer)
    }

    #[test]
    fn scenario_paints_single_wall() {
        let (maze, renderer) = scenario();
        let mut surface = RecordingSurface::new();
        renderer.resize(&mut surface);
        renderer.draw_grid(&mut surface);
        renderer.draw_cells(&mut surface, maze.cells()).unwrap();

        assert_eq!(surface.size(), Some((33, 25)));
        assert_eq!(surface.fill_count(), 12);
        for row in 0..3 {
            for col in 0..4 {
                let rect = renderer.layout().cell_rect(row, col);
                let expected = if (row, col) == (1, 1) {
                    Color32::BLACK
                } else {
                    Color32::WHITE
                };
                for (x, y) in [
                    (rect.x, rect.y),
                    (rect.x + rect.width - 1, rect.y + rect.height - 1),
                ] {
                    assert_eq!(surface.fill_color_at(x, y), Some(expected), "({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn grid_lines_span_the_canvas() {
        let (_, renderer) = scenario();
        let mut surface = RecordingSurface::new();
        renderer.draw_grid(&mut surface);

        let lines: Vec<_> = surface.lines().collect();
        let vertical = lines.iter().filter(|(from, to, _)| from.0 == to.0).count();
        let horizontal = lines.iter().filter(|(from, to, _)| from.1 == to.1).count();
        assert_eq!(vertical, 5);
        assert_eq!(horizontal, 4);
        assert!(lines.iter().all(|(_, _, c)| **c == Color32::from_rgb(0xCC, 0xCC, 0xCC)));
        assert!(lines.contains(&(&(1.0, 0.0), &(1.0, 25.0), &Color32::from_rgb(0xCC, 0xCC, 0xCC))));
        assert!(lines.contains(&(&(0.0, 25.0), &(33.0, 25.0), &Color32::from_rgb(0xCC, 0xCC, 0xCC))));
    }

    #[test]
    fn only_wall_bytes_are_black() {
        let layout = GridLayout::new(8, 1, 3).unwrap();
        let renderer = MazeRenderer::new(layout, Palette::default());
        let cells = [0, 1, 2, 3, 1, 255, 0, 1];
        let mut surface = RecordingSurface::new();
        renderer.draw_cells(&mut surface, &cells).unwrap();
        for (col, byte) in cells.iter().enumerate() {
            let rect = layout.cell_rect(0, col as u32);
            let color = surface.fill_color_at(rect.x, rect.y);
            assert_eq!(color == Some(Color32::BLACK), *byte == 1, "column {col}");
            assert!(color.is_some());
        }
    }

    #[test]
    fn custom_palette_is_used() {
        let palette = Palette {
            grid: Color32::RED,
            wall: Color32::BLUE,
            passage: Color32::YELLOW,
        };
        let renderer = MazeRenderer::new(GridLayout::new(2, 1, 4).unwrap(), palette);
        let mut surface = RecordingSurface::new();
        renderer.draw_grid(&mut surface);
        renderer.draw_cells(&mut surface, &[1, 0]).unwrap();
        assert!(surface.lines().all(|(_, _, c)| *c == Color32::RED));
        assert_eq!(surface.fill_color_at(1, 1), Some(Color32::BLUE));
        assert_eq!(surface.fill_color_at(6, 1), Some(Color32::YELLOW));
    }

    #[test]
    fn mismatched_buffer_is_an_error() {
        let (_, renderer) = scenario();
        let mut surface = RecordingSurface::new();
        let v = renderer.draw_cells(&mut surface, &[0; 11]);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Cell buffer has 11 bytes, expected 12 for a 4x3 maze"
        );
        assert_eq!(surface.fill_count(), 0);
    }

    #[test]
    fn loop_rereads_cells_every_frame() {
        let (mut maze, renderer) = scenario();
        let mut render_loop = RenderLoop::new(renderer);
        let mut surface = RecordingSurface::new();
        render_loop.prepare(&mut surface);
        assert_eq!(surface.size(), Some((33, 25)));

        render_loop.frame(&maze, &mut surface).unwrap();
        let rect = renderer.layout().cell_rect(0, 0);
        assert_eq!(surface.fill_color_at(rect.x, rect.y), Some(Color32::WHITE));

        maze.set(0, 0, Cell::Wall).unwrap();
        surface.clear();
        render_loop.frame(&maze, &mut surface).unwrap();
        assert_eq!(surface.fill_color_at(rect.x, rect.y), Some(Color32::BLACK));
        assert_eq!(render_loop.frames(), 2);

        let names = render_loop.stopwatch().segment_averages().map(|(n, _)| n);
        assert_eq!(names, [Some("Draw grid"), Some("Draw cells")]);
    }

    #[test]
    fn loop_stops_on_resized_maze() {
        let (_, renderer) = scenario();
        let mut render_loop = RenderLoop::new(renderer);
        let mut surface = RecordingSurface::new();
        let other = Maze::from_bytes(5, 3, vec![0; 15]).unwrap();
        let v = render_loop.frame(&other, &mut surface);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Maze changed size from 4x3 to 5x3"
        );
        assert_eq!(render_loop.frames(), 0);
    }

    #[test]
    fn standard_maze_renders_every_cell() {
        let maze = Maze::new();
        let renderer = MazeRenderer::for_maze(&maze, &RenderSettings::default()).unwrap();
        let mut render_loop = RenderLoop::new(renderer);
        let mut surface = RecordingSurface::new();
        render_loop.frame(&maze, &mut surface).unwrap();

        assert_eq!(surface.fill_count(), maze.cells().len());
        let black = surface
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    crate::surface::DrawCommand::FillRect { color, .. } if *color == Color32::BLACK
                )
            })
            .count();
        assert_eq!(black, maze.wall_count());
    }

    #[test]
    fn renderer_rejects_oversized_maze() {
        let maze = Maze::from_bytes(70_000_000, 1, vec![0; 70_000_000]).unwrap();
        let settings = RenderSettings {
            cell_size: 64,
            ..Default::default()
        };
        assert!(MazeRenderer::for_maze(&maze, &settings).is_err());
    }

    #[test]
    fn palette_change_keeps_loop_state() {
        let (maze, renderer) = scenario();
        let mut render_loop = RenderLoop::new(renderer);
        let mut surface = RecordingSurface::new();
        render_loop.frame(&maze, &mut surface).unwrap();

        render_loop.set_palette(Palette {
            wall: Color32::RED,
            ..Default::default()
        });
        surface.clear();
        render_loop.frame(&maze, &mut surface).unwrap();

        let rect = renderer.layout().cell_rect(1, 1);
        assert_eq!(surface.fill_color_at(rect.x, rect.y), Some(Color32::RED));
        assert_eq!(render_loop.frames(), 2);
        assert_eq!(render_loop.renderer().palette().wall, Color32::RED);
    }
}
