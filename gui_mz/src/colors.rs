use eframe::egui::Color32;

pub const HOVERED_CELL_COLOR: Color32 = Color32::from_rgb(255, 140, 0);
pub const RENDER_ERROR_COLOR: Color32 = Color32::RED;
