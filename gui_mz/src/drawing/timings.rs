use crate::app::App;
use core_mz::stopwatch::Stopwatch;
use core_mz::CrossPlatformInstant;
use eframe::egui;
use eframe::egui::Ui;

fn draw_stopwatch<const SEGMENTS: usize, const WINDOW: usize, I: CrossPlatformInstant + Default>(
    stopwatch: &Stopwatch<SEGMENTS, WINDOW, I>,
    ui: &mut Ui,
    id: String,
) {
    ui.label(format!(
        "{} Total: {:.2?} ({:.1} fps)",
        stopwatch.name(),
        stopwatch.process_average(),
        stopwatch.utilization().hz(),
    ));
    ui.label(format!(
        "Drawing {:.2?}, idle {:.2?} per frame",
        stopwatch.utilization().active_time(),
        stopwatch.utilization().idle_time(),
    ));
    ui.separator();
    egui::Grid::new(id)
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (name, time) in stopwatch.segment_averages() {
                ui.label(name.unwrap_or("?"));
                ui.label(format!("{:.2?}", time));
                ui.end_row();
            }
        });
}

pub fn draw_timings(app: &mut App, ui: &mut Ui) {
    draw_stopwatch(app.render_loop.stopwatch(), ui, "render_stopwatch".to_string());
    ui.separator();
    ui.label(format!("Frames drawn: {}", app.render_loop.frames()));
}
