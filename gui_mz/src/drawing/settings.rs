use crate::app::App;
use core_mz::constants::MAX_CELL_SIZE;
use core_mz::maze::standard_maze::StandardMaze;
use core_mz::settings::RenderSettings;
use eframe::egui;
use eframe::egui::{Align, Color32, Layout, TextEdit, Ui, WidgetText};
use std::collections::HashMap;

/// A text field that only writes `value` once its contents pass `validation`
fn validated<T: PartialEq>(
    id: String,
    ui: &mut Ui,
    fields: &mut HashMap<String, (String, String)>,
    value: &mut T,
    text: impl Into<WidgetText>,
    validation: fn(&str) -> Option<T>,
    to_str: fn(&T) -> String,
) {
    let text = text.into();

    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        ui.label(text);

        // (last typed, last valid); first sight of a field starts from the current value
        let (last_typed, last_valid) = fields.entry(id).or_insert_with(|| {
            let str = to_str(value);
            (str.clone(), str)
        });

        let field = ui.add(TextEdit::singleline(last_typed).desired_width(80.0));
        if let Some(t) = validation(last_typed.as_str()) {
            *last_valid = last_typed.to_string();
            // if they're not in the text box, and a new value has come in, replace it
            if !field.has_focus() && t != *value {
                let str = to_str(value);
                last_typed.clone_from(&str);
                *last_valid = str;
            } else {
                *value = t;
            }
        } else if !field.has_focus() {
            // if they're not in the text box, and they typed something invalid, just go back
            last_typed.clone_from(last_valid);
        }
    });
    ui.end_row();
}

/// A cell size the renderer accepts, so out of range input never reaches the settings
fn parse_cell_size(text: &str) -> Option<u32> {
    text.trim()
        .parse()
        .ok()
        .filter(|size| (1..=MAX_CELL_SIZE).contains(size))
}

fn color(ui: &mut Ui, value: &mut Color32, text: &str) {
    ui.label(text);
    ui.color_edit_button_srgba(value);
    ui.end_row();
}

pub fn draw_settings(app: &mut App, ui: &mut Ui) {
    let mut fields = app.settings_fields.take().unwrap_or_default();

    egui::Grid::new("render_settings")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            validated(
                "cell_size".to_string(),
                ui,
                &mut fields,
                &mut app.settings.cell_size,
                format!("Cell size (1-{MAX_CELL_SIZE})"),
                parse_cell_size,
                u32::to_string,
            );

            ui.label("Maze");
            egui::ComboBox::from_id_salt("settings_maze")
                .selected_text(app.settings.standard_maze.to_string())
                .show_ui(ui, |ui| {
                    for maze in StandardMaze::get_all() {
                        ui.selectable_value(
                            &mut app.settings.standard_maze,
                            maze,
                            maze.to_string(),
                        );
                    }
                });
            ui.end_row();

            color(ui, &mut app.settings.palette.grid, "Grid lines");
            color(ui, &mut app.settings.palette.wall, "Walls");
            color(ui, &mut app.settings.palette.passage, "Passages");
        });

    ui.separator();
    if ui.button("Reset").clicked() {
        app.settings = RenderSettings::default();
        fields.clear();
    }

    app.settings_fields = Some(fields);
}
