//! Device identity, session state, and overlay types.
//!
//! [`DeviceModel`] pins down which hardware variant a session talks to and
//! what it can do. [`DeviceSession`] owns the picture id counter that every
//! animation push consumes. Overlay types describe the text and clock/info
//! items the device renders on top of pushed pixels.

mod model;
mod overlay;
mod session;

pub use model::{Capability, Channel, DeviceModel};
pub use overlay::{ItemBuffer, ItemType, OverlayItem, TextOverlay, TextScrollDirection};
pub use session::{DeviceSession, PushTicket, DEFAULT_REFRESH_LIMIT};
