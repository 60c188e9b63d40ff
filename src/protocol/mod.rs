//! Command envelopes, responses, and push assembly.
//!
//! This module implements the JSON request/response protocol:
//! - Flat command envelopes keyed by a `Command` name
//! - Response decoding with the shared `error_code` convention
//! - Per-frame animation push commands with base64 pixel payloads

mod command;
mod push;
mod response;

pub use command::Command;
pub use push::{animation_commands, lcd_array, LCD_PANEL_COUNT};
pub use response::{DeviceResponse, DiscoveredDevice, DiscoveryResponse};

/// Wire names of every envelope this crate sends.
pub mod commands {
    /// Connection probe; also returns the device settings block.
    pub const GET_ALL_CONF: &str = "Channel/GetAllConf";
    /// Display brightness, 0 to 100.
    pub const SET_BRIGHTNESS: &str = "Channel/SetBrightness";
    /// Selects the active channel.
    pub const SET_INDEX: &str = "Channel/SetIndex";
    /// Selects a clock face on the faces channel.
    pub const SET_CLOCK_SELECT_ID: &str = "Channel/SetClockSelectId";
    /// Selects a visualizer on the visualizer channel.
    pub const SET_EQ_POSITION: &str = "Channel/SetEqPosition";
    /// Turns the screen on or off.
    pub const ON_OFF_SCREEN: &str = "Channel/OnOffScreen";
    /// Reads the device clock.
    pub const GET_DEVICE_TIME: &str = "Device/GetDeviceTime";
    /// Plays a GIF from device storage or a URL.
    pub const PLAY_TF_GIF: &str = "Device/PlayTFGif";
    /// Sounds the built-in buzzer.
    pub const PLAY_BUZZER: &str = "Device/PlayBuzzer";
    /// Reboots the device.
    pub const SYS_REBOOT: &str = "Device/SysReboot";
    /// Toggles the high-brightness panel mode.
    pub const SET_HIGH_LIGHT_MODE: &str = "Device/SetHighLightMode";
    /// Mirrors the display horizontally.
    pub const SET_MIRROR_MODE: &str = "Device/SetMirrorMode";
    /// Per-channel white balance, 0 to 100 each.
    pub const SET_WHITE_BALANCE: &str = "Device/SetWhiteBalance";
    /// Toggles the noise meter tool.
    pub const SET_NOISE_STATUS: &str = "Tools/SetNoiseStatus";
    /// Shows the score board tool.
    pub const SET_SCORE_BOARD: &str = "Tools/SetScoreBoard";
    /// Uploads one animation frame.
    pub const SEND_ANIMATION_FRAME: &str = "Draw/SendHttpGif";
    /// Reads the device-side picture id counter.
    pub const GET_ANIMATION_ID: &str = "Draw/GetHttpGifId";
    /// Resets the device-side picture id counter.
    pub const RESET_ANIMATION_ID: &str = "Draw/ResetHttpGifId";
    /// Places a scrolling text overlay.
    pub const SEND_TEXT: &str = "Draw/SendHttpText";
    /// Removes all text overlays.
    pub const CLEAR_TEXT: &str = "Draw/ClearHttpText";
    /// Replaces the overlay item list.
    pub const SEND_ITEM_LIST: &str = "Draw/SendHttpItemList";
}
