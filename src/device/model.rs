//! Hardware variants and their capabilities.

use std::fmt;

/// Supported device variants.
///
/// The set is closed on purpose: capability checks dispatch on the variant,
/// so an unknown model string cannot silently claim features it lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceModel {
    /// 16x16 matrix without overlay support.
    Pixoo16,
    /// 64x64 matrix, the default target.
    Pixoo64,
    /// Multi-panel clock with five individually addressable LCDs.
    TimesGate,
}

/// Features that differ between device variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Scrolling text overlays (`Draw/SendHttpText`).
    TextOverlay,
    /// Overlay item lists (`Draw/SendHttpItemList`).
    ItemOverlay,
}

impl DeviceModel {
    /// Whether this variant implements `capability`.
    pub fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::TextOverlay | Capability::ItemOverlay => self != DeviceModel::Pixoo16,
        }
    }

    /// Native display edge length in pixels.
    pub fn default_size(self) -> u32 {
        match self {
            DeviceModel::Pixoo16 => 16,
            DeviceModel::Pixoo64 | DeviceModel::TimesGate => 64,
        }
    }

    /// The 16x16 variant only accepts frame uploads after the blank
    /// channel is selected.
    pub fn requires_blank_channel_before_push(self) -> bool {
        self == DeviceModel::Pixoo16
    }

    /// Model name as the vendor spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceModel::Pixoo16 => "PIXOO16",
            DeviceModel::Pixoo64 => "PIXOO64",
            DeviceModel::TimesGate => "TIMESGATE",
        }
    }
}

impl Default for DeviceModel {
    fn default() -> Self {
        DeviceModel::Pixoo64
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in display channels selectable with `Channel/SetIndex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Clock faces.
    Faces,
    /// Cloud gallery.
    Cloud,
    /// Audio visualizer.
    Visualizer,
    /// User uploads.
    Custom,
    /// Blank screen.
    Blank,
}

impl Channel {
    /// Channel index as sent on the wire.
    pub fn wire_value(self) -> u8 {
        match self {
            Channel::Faces => 0,
            Channel::Cloud => 1,
            Channel::Visualizer => 2,
            Channel::Custom => 3,
            Channel::Blank => 4,
        }
    }
}
