//! Contains the maze model and the frame-by-frame rendering shared by every front end
//!
//! `gui_mz` drives [`render::RenderLoop`] from either a browser canvas or an egui painter

pub mod cell;
pub mod constants;
pub mod geometry;
pub mod maze;
pub mod render;
pub mod settings;
pub mod surface;
mod util;

pub use util::*;
