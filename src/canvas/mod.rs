//! In-memory drawing surface and the operations that paint on it.
//!
//! Everything here is local: drawing mutates a [`FrameBuffer`] and nothing
//! touches the network until the buffer is snapshotted and pushed. The
//! buffer itself lives in [`buffer`]; line and rectangle rasterization in
//! [`raster`]; glyph rendering and word wrapping in [`text`]; image
//! compositing in [`image`].

mod buffer;
mod image;
mod raster;
mod text;

pub use buffer::FrameBuffer;
pub use image::{ImageSource, RasterImage, ResampleMode};
pub use text::{TextAlign, TextBox};
