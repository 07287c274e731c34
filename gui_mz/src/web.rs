//! Browser front end: paints the maze on an HTML canvas every animation frame

use anyhow::{anyhow, Error};
use core_mz::constants::{CANVAS_ELEMENT_ID, CELL_SIZE_ATTRIBUTE, MAZE_ATTRIBUTE};
use core_mz::css_color;
use core_mz::render::{MazeRenderer, RenderLoop};
use core_mz::settings::RenderSettings;
use core_mz::surface::Surface;
use eframe::egui::Color32;
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// A [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // canvas style strings are only updated when the color changes
    stroke_color: Option<Color32>,
    fill_color: Option<Color32>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            stroke_color: None,
            fill_color: None,
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        // resizing resets the context state
        self.stroke_color = None;
        self.fill_color = None;
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn set_stroke_color(&mut self, color: Color32) {
        if self.stroke_color != Some(color) {
            self.ctx.set_stroke_style_str(&css_color(color));
            self.stroke_color = Some(color);
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_color(&mut self, color: Color32) {
        if self.fill_color != Some(color) {
            self.ctx.set_fill_style_str(&css_color(color));
            self.fill_color = Some(color);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
}

fn js_error(value: JsValue) -> Error {
    anyhow!("{value:?}")
}

/// Apply `data-cell-size` and `data-maze` from the canvas element, if present
fn read_settings(
    canvas: &HtmlCanvasElement,
    mut settings: RenderSettings,
) -> Result<RenderSettings, Error> {
    if let Some(cell_size) = canvas.get_attribute(CELL_SIZE_ATTRIBUTE) {
        settings.cell_size = cell_size
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {CELL_SIZE_ATTRIBUTE} {cell_size:?}: {e}"))?;
    }
    if let Some(maze) = canvas.get_attribute(MAZE_ATTRIBUTE) {
        settings.standard_maze = maze.parse()?;
    }
    settings.validate()?;
    Ok(settings)
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, Error> {
    window
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(js_error)
}

/// Find the canvas, build the maze, and keep redrawing it on every animation frame
pub fn start(settings: RenderSettings) -> Result<(), Error> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window"))?;
    let document = window.document().ok_or_else(|| anyhow!("No document"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow!("Failed to find {CANVAS_ELEMENT_ID}"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("{CANVAS_ELEMENT_ID} was not a HtmlCanvasElement"))?;
    let settings = read_settings(&canvas, settings)?;

    let ctx = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("{CANVAS_ELEMENT_ID} has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("2d context was not a CanvasRenderingContext2d"))?;

    let maze = settings.standard_maze.get_maze();
    let mut render_loop = RenderLoop::new(MazeRenderer::for_maze(&maze, &settings)?);
    let mut surface = CanvasSurface::new(canvas, ctx);
    render_loop.prepare(&mut surface);
    info!("Drawing {} on {CANVAS_ELEMENT_ID}", settings.standard_maze);

    // the closure holds a handle to itself so it can schedule the next frame
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Err(e) = render_loop.frame(&maze, &mut surface) {
            error!("Render loop stopped after {} frames: {e:?}", render_loop.frames());
            // drop our handle so the closure is freed
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(f) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&loop_window, f) {
                error!("Failed to schedule the next frame: {e:?}");
            }
        }
    }));

    let first = callback.borrow();
    let f = first
        .as_ref()
        .ok_or_else(|| anyhow!("Render loop closure is missing"))?;
    request_animation_frame(&window, f)?;
    Ok(())
}
