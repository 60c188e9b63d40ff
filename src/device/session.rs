//! Picture id session state.
//!
//! The device tags every animation upload with a picture id and refuses
//! ids it has already seen, so the client tracks a monotonically growing
//! counter. To keep the id small the session wraps it back to 1 once it
//! reaches a configurable threshold; the wrap must be mirrored on the
//! device with a remote reset command, which the caller issues whenever a
//! returned [`PushTicket`] demands it.

use crate::error::{PixooError, Result};

use super::model::{Capability, DeviceModel};

/// Default number of pushes before the picture id wraps back to 1.
pub const DEFAULT_REFRESH_LIMIT: u32 = 32;

/// Everything `push` needs from the session for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushTicket {
    /// Picture id to stamp on every frame of this push.
    pub pic_id: u32,
    /// Whether the device-side counter must be reset before uploading.
    pub reset_remote: bool,
}

/// Per-connection protocol state: the target variant plus the picture id
/// counter with its wrap policy.
#[derive(Debug, Clone)]
pub struct DeviceSession {
    model: DeviceModel,
    counter: u32,
    refresh_limit: u32,
    auto_reset: bool,
}

impl DeviceSession {
    /// Creates a session with the counter at its starting value of 1.
    pub fn new(model: DeviceModel, refresh_limit: u32, auto_reset: bool) -> Self {
        Self {
            model,
            counter: 1,
            refresh_limit,
            auto_reset,
        }
    }

    /// Variant this session talks to.
    #[inline]
    pub fn model(&self) -> DeviceModel {
        self.model
    }

    /// Current counter value; the next push will use a higher id.
    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Adopts the counter value reported by the device.
    pub fn seed(&mut self, counter: u32) {
        self.counter = counter;
    }

    /// Whether the adopted counter already sits past the wrap threshold,
    /// in which case the caller should reset the device and the session
    /// before the first push.
    pub fn seed_exceeds_limit(&self) -> bool {
        self.auto_reset && self.counter > self.refresh_limit
    }

    /// Puts the counter back to its starting value.
    pub fn reset(&mut self) {
        self.counter = 1;
    }

    /// Advances the counter for one push.
    ///
    /// When the advance reaches the wrap threshold (and auto-reset is on),
    /// the counter restarts at 1 and the ticket demands a remote reset, so
    /// issued picture ids never reach `refresh_limit`.
    pub fn begin_push(&mut self) -> PushTicket {
        self.counter += 1;
        if self.auto_reset && self.counter >= self.refresh_limit {
            self.counter = 1;
            return PushTicket {
                pic_id: 1,
                reset_remote: true,
            };
        }
        PushTicket {
            pic_id: self.counter,
            reset_remote: false,
        }
    }

    /// Fails with [`PixooError::Unsupported`] when the session's variant
    /// lacks `capability`.
    pub fn require(&self, capability: Capability, operation: &'static str) -> Result<()> {
        if self.model.supports(capability) {
            Ok(())
        } else {
            Err(PixooError::Unsupported {
                model: self.model,
                operation,
            })
        }
    }
}
