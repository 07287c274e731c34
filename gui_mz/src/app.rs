use crate::drawing::tab::Tab;
use crate::drawing::widgets::draw_widgets;
use anyhow::Error;
use core_mz::maze::standard_maze::StandardMaze;
use core_mz::maze::Maze;
use core_mz::render::{MazeRenderer, RenderLoop};
use core_mz::settings::RenderSettings;
use eframe::egui;
use eframe::egui::{Align, Visuals};
use egui_dock::{DockArea, DockState, NodeIndex, Style};
use log::{info, warn};
use std::collections::HashMap;

/// Stores all the data needed for the application
pub struct App {
    dock_state: Option<DockState<Tab>>,

    pub maze: Maze,
    pub render_loop: RenderLoop,
    /// Set when a frame failed; no more frames are drawn until the cell size or maze changes
    pub render_error: Option<String>,
    /// `(row, col)` under the pointer
    pub hovered_cell: Option<(u32, u32)>,

    old_settings: RenderSettings,
    pub settings: RenderSettings,
    pub settings_fields: Option<HashMap<String, (String, String)>>,
}

/// The maze on the left; settings and the stopwatch stacked on the right
///
/// The maze only draws while its tab is visible, so it never shares a leaf with the stopwatch
pub fn default_dock_state() -> DockState<Tab> {
    let mut dock_state = DockState::new(vec![Tab::Maze]);
    let surface = dock_state.main_surface_mut();
    let [_, right] = surface.split_right(NodeIndex::root(), 0.75, vec![Tab::Settings]);
    surface.split_below(right, 0.5, vec![Tab::Stopwatch]);
    dock_state
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.settings != self.old_settings {
            self.apply_settings();
        }

        self.draw_layout(ctx);

        // keep drawing every frame, like requestAnimationFrame would
        if self.render_error.is_none() {
            ctx.request_repaint();
        }
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, Error> {
        cc.egui_ctx
            .style_mut(|style| style.visuals = Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

        cc.egui_ctx.set_fonts(fonts);

        let settings = RenderSettings::default();
        let maze = settings.standard_maze.get_maze();
        let render_loop = RenderLoop::new(MazeRenderer::for_maze(&maze, &settings)?);

        Ok(Self {
            dock_state: Some(default_dock_state()),

            maze,
            render_loop,
            render_error: None,
            hovered_cell: None,

            old_settings: settings.clone(),
            settings,
            settings_fields: Some(HashMap::new()),
        })
    }

    /// Apply changed settings, or roll back invalid ones
    ///
    /// A new cell size or maze rebuilds the render loop; color changes are applied in place
    fn apply_settings(&mut self) {
        if let Err(e) = self.settings.validate() {
            warn!("Ignoring invalid settings: {e}");
            self.settings = self.old_settings.clone();
            return;
        }
        if self.settings.cell_size != self.old_settings.cell_size
            || self.settings.standard_maze != self.old_settings.standard_maze
        {
            let new_maze = (self.maze.standard_maze() != Some(self.settings.standard_maze))
                .then(|| self.settings.standard_maze.get_maze());
            let maze = new_maze.as_ref().unwrap_or(&self.maze);
            let renderer = match MazeRenderer::for_maze(maze, &self.settings) {
                Ok(renderer) => renderer,
                Err(e) => {
                    warn!("Ignoring invalid settings: {e}");
                    self.settings = self.old_settings.clone();
                    return;
                }
            };
            if let Some(maze) = new_maze {
                info!("Switching to maze {}", self.settings.standard_maze);
                self.maze = maze;
            }
            self.render_loop = RenderLoop::new(renderer);
            self.render_error = None;
        } else {
            self.render_loop.set_palette(self.settings.palette);
        }
        self.old_settings = self.settings.clone();
    }

    /// Draw the main outer layout
    pub fn draw_layout(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                    // maze selector
                    egui::ComboBox::from_label("")
                        .selected_text(self.settings.standard_maze.to_string())
                        .show_ui(ui, |ui| {
                            StandardMaze::get_all().iter().for_each(|maze| {
                                ui.selectable_value(
                                    &mut self.settings.standard_maze,
                                    *maze,
                                    maze.to_string(),
                                );
                            });
                        });
                    egui::menu::bar(ui, |ui| draw_widgets(self, ui));
                });
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(match self.hovered_cell {
                        None => "".to_string(),
                        Some((row, col)) => {
                            let cell = self
                                .maze
                                .get(row, col)
                                .map(|c| c.to_string())
                                .unwrap_or("?".to_string());
                            format!("({row}, {col}) {cell}")
                        }
                    });
                });
            });
        });

        // take out dock_state to pass it to DockArea::new and allow tabs to use data from App
        if let Some(mut dock_state) = self.dock_state.take() {
            DockArea::new(&mut dock_state)
                .style(Style::from_egui(ctx.style().as_ref()))
                .show(ctx, self);
            self.dock_state = Some(dock_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_does_not_hide_the_maze() {
        let dock_state = default_dock_state();
        let (_, maze, _) = dock_state.find_tab(&Tab::Maze).unwrap();
        let (_, stopwatch, _) = dock_state.find_tab(&Tab::Stopwatch).unwrap();
        let (_, settings, _) = dock_state.find_tab(&Tab::Settings).unwrap();
        assert_ne!(maze, stopwatch);
        assert_ne!(maze, settings);
    }
}
