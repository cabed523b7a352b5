pub mod canvas;
pub mod draw;
pub mod raster;

pub use canvas::{Canvas, RenderError};
