//! # pixoo-client
//!
//! Rust client for Divoom Pixoo pixel matrix displays.
//!
//! This crate draws into an in-memory RGB frame buffer (pixels, lines,
//! text, images), captures buffer snapshots into animations, and ships
//! them to the device as JSON command envelopes, alongside the rest of
//! the device command surface (brightness, channels, overlays, tools).
//!
//! ## Architecture
//!
//! - **Canvas** (in memory): frame buffer, rasterizer, text engine, image compositor
//! - **Session** (stateful): picture-id counter lifecycle, model capability gates
//! - **Wire** (HTTP): one JSON command envelope per blocking round trip
//!
//! ## Example
//!
//! ```no_run
//! use pixoo_client::{palette, Font, Pixoo, Point};
//!
//! fn main() -> pixoo_client::Result<()> {
//!     let mut pixoo = Pixoo::open("192.168.1.40")?;
//!     pixoo.clear();
//!     pixoo.draw_text("on air", Point::new(2, 2), palette::RED, Font::tiny());
//!     pixoo.push()?;
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod device;
pub mod error;
pub mod font;
pub mod protocol;
pub mod simulator;
pub mod transport;

mod animation;
mod client;
mod color;
mod geometry;

pub use animation::{AnimationBuffer, Frame};
pub use canvas::{FrameBuffer, ImageSource, RasterImage, ResampleMode, TextAlign, TextBox};
pub use client::{Pixoo, PixooBuilder, PushOptions, DEFAULT_FRAME_SPEED_MS};
pub use color::{palette, Rgb};
pub use device::{
    Capability, Channel, DeviceModel, ItemType, OverlayItem, TextOverlay, TextScrollDirection,
};
pub use error::{PixooError, Result};
pub use font::{Font, Glyph};
pub use geometry::Point;
pub use protocol::{Command, DeviceResponse, DiscoveredDevice};
pub use simulator::{FrameSink, PushRecord, RecordingSink};
pub use transport::{discover_devices, first_device_ip, HttpTransport, Transport};
