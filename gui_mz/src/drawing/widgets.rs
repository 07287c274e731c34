use crate::app::App;
use core_mz::ColoredStatus;
use eframe::egui;
use eframe::egui::{RichText, Ui};

pub fn status_icon(status: &ColoredStatus) -> &'static str {
    match status {
        ColoredStatus::Ok(_) => egui_phosphor::regular::CHECK,
        ColoredStatus::Warn(_) => egui_phosphor::regular::WARNING,
        ColoredStatus::Error(_) => egui_phosphor::regular::X,
        ColoredStatus::NotApplicable(_) => "",
    }
}

fn draw_status(ui: &mut Ui, status: &ColoredStatus, label: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(status_icon(status)).color(status.to_color32_solid()));
        ui.label(format!(
            "{}: {}",
            label,
            status.message().unwrap_or("?".to_string())
        ));
    });
}

/// Frame timing button for the top bar; hover for details
pub fn draw_widgets(app: &mut App, ui: &mut Ui) {
    let stopwatch = app.render_loop.stopwatch();
    let status = if app.render_error.is_some() {
        ColoredStatus::Error(app.render_error.clone())
    } else {
        stopwatch.status()
    };

    let button = ui.add(
        egui::Button::new(RichText::new(format!(
            "{} {:.0}",
            egui_phosphor::regular::TIMER,
            stopwatch.utilization().hz()
        )))
        .fill(status.to_color32()),
    );
    button.on_hover_ui(|ui| {
        draw_status(ui, &status, "Frame time");
        draw_status(ui, &stopwatch.utilization().status(), "Utilization");
    });
}
