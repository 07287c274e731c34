use crate::app::App;
use crate::drawing::maze::draw_maze;
use crate::drawing::settings::draw_settings;
use crate::drawing::timings::draw_timings;
use eframe::egui::{Ui, WidgetText};
use egui_dock::TabViewer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tab {
    /// The maze itself
    Maze,
    /// Frame timings
    Stopwatch,
    /// User settings
    Settings,
}

impl TabViewer for App {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> WidgetText {
        match tab {
            Tab::Maze => "Maze",
            Tab::Stopwatch => "Stopwatch",
            Tab::Settings => "Settings",
        }
        .into()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Tab::Maze => draw_maze(self, ui),
            Tab::Stopwatch => draw_timings(self, ui),
            Tab::Settings => draw_settings(self, ui),
        }
    }

    fn closeable(&mut self, tab: &mut Self::Tab) -> bool {
        !matches!(tab, Tab::Maze)
    }
}
