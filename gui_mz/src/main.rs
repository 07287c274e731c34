#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
mod colors;
#[cfg(not(target_arch = "wasm32"))]
mod drawing;
#[cfg(target_arch = "wasm32")]
mod web;

use log::info;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Maze viewer starting up");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Maze Viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)?))),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use core_mz::settings::RenderSettings;
    use log::error;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    info!("WASM maze viewer starting up");

    if let Err(e) = web::start(RenderSettings::default()) {
        error!("Failed to start the maze viewer: {e:?}");
    }
}
