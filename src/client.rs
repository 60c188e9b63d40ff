//! Client builder and device facade.
//!
//! [`PixooBuilder`] provides a fluent API for configuring the device model,
//! canvas size and refresh behavior. [`PixooBuilder::connect`] runs the
//! connection lifecycle:
//! 1. Probe the device with a configuration read
//! 2. Seed the animation counter from the device
//! 3. Reset the counter when it already exceeds the refresh limit
//!
//! The resulting [`Pixoo`] owns the drawing buffer, the frame queue and the
//! session counter; every remote operation is one blocking round trip.
//! [`PixooBuilder::simulated`] skips the lifecycle and hands pushes to a
//! [`FrameSink`] instead of a device.
//!
//! # Example
//!
//! ```no_run
//! use pixoo_client::{palette, Font, Pixoo, Point};
//!
//! fn main() -> pixoo_client::Result<()> {
//!     let mut pixoo = Pixoo::open("192.168.1.40")?;
//!     pixoo.fill(palette::BLACK);
//!     pixoo.draw_text("hello", Point::new(2, 2), palette::WHITE, Font::tiny());
//!     pixoo.push()?;
//!     Ok(())
//! }
//! ```

use tracing::{debug, warn};

use crate::animation::{AnimationBuffer, Frame};
use crate::canvas::{FrameBuffer, ImageSource, ResampleMode, TextBox};
use crate::color::Rgb;
use crate::device::{
    Capability, Channel, DeviceModel, DeviceSession, ItemBuffer, OverlayItem, TextOverlay,
    DEFAULT_REFRESH_LIMIT,
};
use crate::error::{PixooError, Result};
use crate::font::Font;
use crate::geometry::Point;
use crate::protocol::{animation_commands, commands, Command, DeviceResponse};
use crate::simulator::FrameSink;
use crate::transport::{HttpTransport, Transport};

/// Default playback time per animation frame, in milliseconds.
pub const DEFAULT_FRAME_SPEED_MS: u32 = 500;

/// Where pushes and device commands go.
enum Target {
    Remote(Box<dyn Transport>),
    Simulated(Box<dyn FrameSink>),
}

/// Per-push settings.
#[derive(Debug, Clone, Copy)]
pub struct PushOptions {
    /// Playback time per frame in milliseconds. Default: 500
    pub speed_ms: u32,
    /// Target panel on multi-panel devices, 0..=4. Default: 0
    pub lcd_index: u8,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_FRAME_SPEED_MS,
            lcd_index: 0,
        }
    }
}

/// Builder for configuring and opening a device handle.
///
/// Use the fluent API to pick the model, size and refresh behavior, then
/// call `connect()` with a transport or `simulated()` with a sink.
pub struct PixooBuilder {
    model: DeviceModel,
    size: Option<u32>,
    refresh_limit: u32,
    auto_reset: bool,
}

impl PixooBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            model: DeviceModel::default(),
            size: None,
            refresh_limit: DEFAULT_REFRESH_LIMIT,
            auto_reset: true,
        }
    }

    /// Set the device model.
    ///
    /// The model decides the default canvas size, the capability set and
    /// push quirks. Default: [`DeviceModel::Pixoo64`]
    pub fn model(mut self, model: DeviceModel) -> Self {
        self.model = model;
        self
    }

    /// Set the canvas size in pixels per side.
    ///
    /// Must be 16, 32 or 64. Default: the model's native size
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the refresh threshold for the animation counter.
    ///
    /// When a push would bring the counter to this value, the session
    /// resets it remotely and restarts at 1. Default: 32
    pub fn refresh_counter_limit(mut self, limit: u32) -> Self {
        self.refresh_limit = limit;
        self
    }

    /// Enable or disable automatic counter resets.
    ///
    /// With resets disabled the counter grows without bound, which degrades
    /// animation playback on real firmware. Default: enabled
    pub fn auto_reset(mut self, enabled: bool) -> Self {
        self.auto_reset = enabled;
        self
    }

    /// Open a handle over the given transport and run the connection
    /// lifecycle (probe, counter seed, stale-counter reset).
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported size, an unreachable device, or
    /// a rejected counter query.
    pub fn connect(self, transport: impl Transport + 'static) -> Result<Pixoo> {
        let mut pixoo = self.build(Target::Remote(Box::new(transport)))?;
        pixoo.handshake()?;
        Ok(pixoo)
    }

    /// Open a simulated handle that hands pushes to `sink`.
    ///
    /// No network traffic happens; the counter starts at 1.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported size.
    pub fn simulated(self, sink: impl FrameSink + 'static) -> Result<Pixoo> {
        self.build(Target::Simulated(Box::new(sink)))
    }

    fn build(self, target: Target) -> Result<Pixoo> {
        let size = self.size.unwrap_or_else(|| self.model.default_size());
        if !matches!(size, 16 | 32 | 64) {
            return Err(PixooError::InvalidSize(size));
        }
        Ok(Pixoo {
            target,
            buffer: FrameBuffer::new(size),
            animation: AnimationBuffer::new(),
            items: ItemBuffer::new(),
            session: DeviceSession::new(self.model, self.refresh_limit, self.auto_reset),
            size,
        })
    }
}

impl Default for PixooBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one pixel matrix display.
///
/// Drawing calls mutate an in-memory buffer; nothing reaches the device
/// until [`Pixoo::push`]. Device commands (brightness, channel, overlays)
/// go out immediately.
pub struct Pixoo {
    target: Target,
    buffer: FrameBuffer,
    animation: AnimationBuffer,
    items: ItemBuffer,
    session: DeviceSession,
    size: u32,
}

impl Pixoo {
    /// Create a new builder.
    pub fn builder() -> PixooBuilder {
        PixooBuilder::new()
    }

    /// Connect to a device at `address` with default settings over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error when the device cannot be reached or rejects the
    /// connection lifecycle commands.
    pub fn open(address: &str) -> Result<Self> {
        let transport = HttpTransport::new(address)?;
        Self::builder().connect(transport)
    }

    /// Canvas size in pixels per side.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Configured device model.
    #[inline]
    pub fn model(&self) -> DeviceModel {
        self.session.model()
    }

    /// Current animation counter value.
    #[inline]
    pub fn counter(&self) -> u32 {
        self.session.counter()
    }

    /// Read access to the drawing buffer.
    #[inline]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Number of queued animation frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.animation.len()
    }

    /// Number of queued overlay items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // --- drawing ---------------------------------------------------------

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
    }

    /// Reset the buffer to black.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Write one pixel. Out-of-range positions are ignored.
    pub fn draw_pixel(&mut self, position: impl Into<Point>, color: Rgb) {
        self.buffer.write_pixel(position.into(), color);
    }

    /// Write one pixel by flat index. Out-of-range indices are ignored.
    pub fn draw_pixel_at_index(&mut self, index: usize, color: Rgb) {
        self.buffer.write_pixel_at_index(index, color);
    }

    /// Draw a line between two points, both endpoints included.
    pub fn draw_line(&mut self, start: impl Into<Point>, end: impl Into<Point>, color: Rgb) {
        self.buffer.draw_line(start.into(), end.into(), color);
    }

    /// Draw a filled rectangle with inclusive corners.
    pub fn draw_filled_rectangle(
        &mut self,
        top_left: impl Into<Point>,
        bottom_right: impl Into<Point>,
        color: Rgb,
    ) {
        self.buffer
            .draw_filled_rectangle(top_left.into(), bottom_right.into(), color);
    }

    /// Draw a single character. Characters missing from the font are
    /// skipped.
    pub fn draw_character(
        &mut self,
        character: char,
        origin: impl Into<Point>,
        color: Rgb,
        font: &Font,
    ) {
        self.buffer
            .draw_character(character, origin.into(), color, font);
    }

    /// Draw a line of text without wrapping.
    pub fn draw_text(&mut self, text: &str, origin: impl Into<Point>, color: Rgb, font: &Font) {
        self.buffer.draw_text(text, origin.into(), color, font);
    }

    /// Draw text wrapped and aligned inside a box.
    pub fn draw_text_boxed(
        &mut self,
        text: &str,
        origin: impl Into<Point>,
        color: Rgb,
        font: &Font,
        text_box: TextBox,
    ) {
        self.buffer
            .draw_text_boxed(text, origin.into(), color, font, text_box);
    }

    /// Composite an image onto the buffer, scaling it down when it exceeds
    /// the canvas. Pixels landing outside the canvas are clipped.
    pub fn draw_image(
        &mut self,
        image: &dyn ImageSource,
        origin: impl Into<Point>,
        mode: ResampleMode,
        pad: bool,
    ) {
        self.buffer.draw_image(image, origin.into(), mode, pad);
    }

    // --- animation frames ------------------------------------------------

    /// Snapshot the buffer and append it to the frame queue.
    pub fn save_frame(&mut self) {
        self.animation.push(self.buffer.snapshot());
    }

    /// Snapshot the buffer over the frame at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PixooError::FrameIndex`] when `index` is out of range.
    pub fn save_frame_at(&mut self, index: usize) -> Result<()> {
        let frame = self.buffer.snapshot();
        self.animation.replace(index, frame)
    }

    /// Empty the frame queue.
    pub fn clear_frames(&mut self) {
        self.animation.clear();
    }

    // --- push --------------------------------------------------------------

    /// Push with default options (500 ms per frame, panel 0).
    ///
    /// See [`Pixoo::push_with`].
    ///
    /// # Errors
    ///
    /// Returns an error when the device rejects any of the upload commands
    /// or cannot be reached.
    pub fn push(&mut self) -> Result<u32> {
        self.push_with(PushOptions::default())
    }

    /// Send the queued frames to the device and return the picture id they
    /// were shipped under.
    ///
    /// An empty queue ships one snapshot of the live buffer instead; the
    /// queue itself is left untouched either way and only
    /// [`Pixoo::clear_frames`] empties it. Each push advances the counter,
    /// and when the refresh limit is reached the device counter is reset
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error when the device rejects any of the upload commands
    /// or cannot be reached.
    pub fn push_with(&mut self, options: PushOptions) -> Result<u32> {
        let frames: Vec<Frame> = if self.animation.is_empty() {
            vec![self.buffer.snapshot()]
        } else {
            self.animation.frames().to_vec()
        };
        let ticket = self.session.begin_push();
        match &mut self.target {
            Target::Simulated(sink) => {
                debug!(
                    "Simulated push: {} frame(s) as picture {}",
                    frames.len(),
                    ticket.pic_id
                );
                sink.display(&frames, options.speed_ms, ticket.pic_id)?;
            }
            Target::Remote(transport) => {
                if ticket.reset_remote {
                    debug!("Animation counter reached the refresh limit, resetting");
                    transport
                        .request(&Command::new(commands::RESET_ANIMATION_ID))?
                        .check(commands::RESET_ANIMATION_ID)?;
                }
                if self.session.model().requires_blank_channel_before_push() {
                    // The 16-pixel firmware drops uploads on any other channel.
                    let blank = Command::new(commands::SET_INDEX)
                        .with("SelectIndex", Channel::Blank.wire_value());
                    transport.request(&blank)?.check(blank.name())?;
                }
                debug!(
                    "Pushing {} frame(s) as picture {}",
                    frames.len(),
                    ticket.pic_id
                );
                for command in animation_commands(
                    &frames,
                    self.size,
                    ticket.pic_id,
                    options.speed_ms,
                    options.lcd_index,
                ) {
                    transport.request(&command)?.check(command.name())?;
                }
            }
        }
        Ok(ticket.pic_id)
    }

    // --- overlays ----------------------------------------------------------

    /// Start a scrolling text overlay on the device.
    ///
    /// # Errors
    ///
    /// Returns [`PixooError::Unsupported`] on models without text overlays
    /// (checked before any network interaction), or the device's rejection.
    pub fn send_text(&mut self, overlay: &TextOverlay) -> Result<()> {
        self.session.require(Capability::TextOverlay, "send_text")?;
        self.send_command(overlay.to_command())?;
        Ok(())
    }

    /// Remove all text overlays from the device.
    pub fn clear_text(&mut self) -> Result<()> {
        self.send_command(Command::new(commands::CLEAR_TEXT))?;
        Ok(())
    }

    /// Queue an overlay item for the next [`Pixoo::send_items`].
    pub fn add_item(&mut self, item: OverlayItem) {
        self.items.add(item);
    }

    /// Send the queued overlay items to panel 0 as one replacing batch.
    ///
    /// The queue is emptied only after the device accepts the batch.
    ///
    /// # Errors
    ///
    /// Returns [`PixooError::Unsupported`] on models without item overlays,
    /// or the device's rejection.
    pub fn send_items(&mut self) -> Result<()> {
        self.send_items_on(0)
    }

    /// Send the queued overlay items to one panel of a multi-panel device.
    pub fn send_items_on(&mut self, lcd_index: u8) -> Result<()> {
        self.session.require(Capability::ItemOverlay, "send_items")?;
        let command = self.items.to_command(lcd_index);
        self.send_command(command)?;
        self.items.clear();
        Ok(())
    }

    // --- device commands ---------------------------------------------------

    /// Set the display brightness in percent. Values above 100 are clamped.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        let command =
            Command::new(commands::SET_BRIGHTNESS).with("Brightness", brightness.min(100));
        self.send_command(command)?;
        Ok(())
    }

    /// Switch the display to a channel.
    pub fn set_channel(&mut self, channel: Channel) -> Result<()> {
        let command = Command::new(commands::SET_INDEX).with("SelectIndex", channel.wire_value());
        self.send_command(command)?;
        Ok(())
    }

    /// Select a clock face by id.
    pub fn set_clock(&mut self, clock_id: u32) -> Result<()> {
        let command = Command::new(commands::SET_CLOCK_SELECT_ID).with("ClockId", clock_id);
        self.send_command(command)?;
        Ok(())
    }

    /// Alias of [`Pixoo::set_clock`], matching the vendor's "face" wording.
    pub fn set_face(&mut self, clock_id: u32) -> Result<()> {
        self.set_clock(clock_id)
    }

    /// Select an audio visualizer by position.
    pub fn set_visualizer(&mut self, position: u32) -> Result<()> {
        let command = Command::new(commands::SET_EQ_POSITION).with("EqPosition", position);
        self.send_command(command)?;
        Ok(())
    }

    /// Turn the screen on or off.
    pub fn set_screen(&mut self, on: bool) -> Result<()> {
        let command = Command::new(commands::ON_OFF_SCREEN).with("OnOff", u8::from(on));
        self.send_command(command)?;
        Ok(())
    }

    /// Turn the screen on.
    pub fn set_screen_on(&mut self) -> Result<()> {
        self.set_screen(true)
    }

    /// Turn the screen off.
    pub fn set_screen_off(&mut self) -> Result<()> {
        self.set_screen(false)
    }

    /// Toggle the high-brightness mode.
    pub fn set_high_light_mode(&mut self, on: bool) -> Result<()> {
        let command = Command::new(commands::SET_HIGH_LIGHT_MODE).with("Mode", on);
        self.send_command(command)?;
        Ok(())
    }

    /// Mirror the display horizontally.
    pub fn set_mirror_mode(&mut self, on: bool) -> Result<()> {
        let command = Command::new(commands::SET_MIRROR_MODE).with("Mode", on);
        self.send_command(command)?;
        Ok(())
    }

    /// Toggle the ambient-noise meter tool.
    pub fn set_noise_status(&mut self, on: bool) -> Result<()> {
        let command = Command::new(commands::SET_NOISE_STATUS).with("NoiseStatus", on);
        self.send_command(command)?;
        Ok(())
    }

    /// Show the score board tool. Scores above 999 are clamped.
    pub fn set_score_board(&mut self, blue: u32, red: u32) -> Result<()> {
        let command = Command::new(commands::SET_SCORE_BOARD)
            .with("BlueScore", blue.min(999))
            .with("RedScore", red.min(999));
        self.send_command(command)?;
        Ok(())
    }

    /// Set the white balance. Channels work in percent; values above 100
    /// are clamped.
    pub fn set_white_balance(&mut self, color: Rgb) -> Result<()> {
        let command = Command::new(commands::SET_WHITE_BALANCE)
            .with("RValue", color.r.min(100))
            .with("GValue", color.g.min(100))
            .with("BValue", color.b.min(100));
        self.send_command(command)?;
        Ok(())
    }

    /// Sound the buzzer: active/idle time per cycle and total duration, all
    /// in milliseconds (the vendor app uses 500/500/3000).
    pub fn sound_buzzer(&mut self, active_ms: u32, off_ms: u32, total_ms: u32) -> Result<()> {
        let command = Command::new(commands::PLAY_BUZZER)
            .with("ActiveTimeInCycle", active_ms)
            .with("OffTimeInCycle", off_ms)
            .with("PlayTotalTime", total_ms);
        self.send_command(command)?;
        Ok(())
    }

    /// Reboot the device.
    pub fn reboot(&mut self) -> Result<()> {
        self.send_command(Command::new(commands::SYS_REBOOT))?;
        Ok(())
    }

    /// Play a GIF stored on the device's SD card.
    pub fn play_local_gif(&mut self, path: &str) -> Result<()> {
        self.play_gif(0, path)
    }

    /// Play all GIFs in a directory on the device's SD card.
    pub fn play_local_gif_directory(&mut self, path: &str) -> Result<()> {
        self.play_gif(1, path)
    }

    /// Play a GIF fetched by the device from a URL.
    pub fn play_net_gif(&mut self, url: &str) -> Result<()> {
        self.play_gif(2, url)
    }

    fn play_gif(&mut self, file_type: u8, file_name: &str) -> Result<()> {
        let command = Command::new(commands::PLAY_TF_GIF)
            .with("FileType", file_type)
            .with("FileName", file_name);
        self.send_command(command)?;
        Ok(())
    }

    /// Read the device clock.
    ///
    /// # Errors
    ///
    /// Returns an error when the device rejects the query or cannot be
    /// reached.
    pub fn get_device_time(&mut self) -> Result<DeviceResponse> {
        self.send_command(Command::new(commands::GET_DEVICE_TIME))
    }

    /// Read the full device configuration.
    pub fn get_all_device_configurations(&mut self) -> Result<DeviceResponse> {
        self.send_command(Command::new(commands::GET_ALL_CONF))
    }

    // --- internals -----------------------------------------------------------

    /// One checked round trip; simulated handles log and report success.
    fn send_command(&mut self, command: Command) -> Result<DeviceResponse> {
        match &mut self.target {
            Target::Remote(transport) => transport.request(&command)?.check(command.name()),
            Target::Simulated(_) => {
                debug!("Simulated device, dropping {}", command.name());
                Ok(DeviceResponse::ok())
            }
        }
    }

    /// Connection lifecycle: probe, counter seed, stale-counter reset.
    fn handshake(&mut self) -> Result<()> {
        let Target::Remote(transport) = &mut self.target else {
            return Ok(());
        };
        // Any structured reply proves the device is reachable; a non-zero
        // code here must not abort the connection.
        let probe = transport.request(&Command::new(commands::GET_ALL_CONF))?;
        if !probe.is_success() {
            warn!(
                "Configuration probe answered with code {}",
                probe.error_code
            );
        }
        let reply = transport
            .request(&Command::new(commands::GET_ANIMATION_ID))?
            .check(commands::GET_ANIMATION_ID)?;
        let counter = match reply.pic_id() {
            Some(id) => id,
            None => {
                warn!("Counter reply carried no PicId, starting from 1");
                1
            }
        };
        self.session.seed(counter);
        debug!("Animation counter seeded at {}", counter);
        if self.session.seed_exceeds_limit() {
            debug!(
                "Seeded counter {} exceeds the refresh limit, resetting",
                counter
            );
            transport
                .request(&Command::new(commands::RESET_ANIMATION_ID))?
                .check(commands::RESET_ANIMATION_ID)?;
            self.session.reset();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use serde_json::{json, Value};

    use crate::color::palette;
    use crate::simulator::RecordingSink;

    /// Transport double that records every envelope and answers from a
    /// fixed script.
    #[derive(Clone)]
    struct ScriptedTransport {
        sent: Arc<Mutex<Vec<Value>>>,
        pic_id: u32,
        fail: Option<(&'static str, i64)>,
    }

    impl ScriptedTransport {
        fn new(pic_id: u32) -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
                pic_id,
                fail: None,
            }
        }

        fn failing_on(pic_id: u32, command: &'static str, code: i64) -> Self {
            Self {
                fail: Some((command, code)),
                ..Self::new(pic_id)
            }
        }

        fn sent(&self) -> Vec<Value> {
            self.sent.lock().unwrap().clone()
        }

        fn command_names(&self) -> Vec<String> {
            self.sent()
                .iter()
                .map(|envelope| envelope["Command"].as_str().unwrap().to_string())
                .collect()
        }
    }

    impl Transport for ScriptedTransport {
        fn request(&self, command: &Command) -> Result<DeviceResponse> {
            self.sent.lock().unwrap().push(command.to_json());
            if let Some((name, code)) = self.fail {
                if command.name() == name {
                    return Ok(serde_json::from_value(json!({ "error_code": code }))?);
                }
            }
            let reply = if command.name() == commands::GET_ANIMATION_ID {
                json!({ "error_code": 0, "PicId": self.pic_id })
            } else {
                json!({ "error_code": 0 })
            };
            Ok(serde_json::from_value(reply)?)
        }
    }

    #[test]
    fn test_builder_defaults() {
        let pixoo = Pixoo::builder().simulated(RecordingSink::new()).unwrap();
        assert_eq!(pixoo.size(), 64);
        assert_eq!(pixoo.model(), DeviceModel::Pixoo64);
        assert_eq!(pixoo.counter(), 1);
        assert_eq!(pixoo.frame_count(), 0);
        assert_eq!(pixoo.item_count(), 0);
    }

    #[test]
    fn test_builder_rejects_unsupported_size() {
        let result = Pixoo::builder().size(40).simulated(RecordingSink::new());
        assert!(matches!(result, Err(PixooError::InvalidSize(40))));
    }

    #[test]
    fn test_model_picks_default_size() {
        let pixoo = Pixoo::builder()
            .model(DeviceModel::Pixoo16)
            .simulated(RecordingSink::new())
            .unwrap();
        assert_eq!(pixoo.size(), 16);
    }

    #[test]
    fn test_connect_probes_and_seeds_counter() {
        let transport = ScriptedTransport::new(7);
        let pixoo = Pixoo::builder().connect(transport.clone()).unwrap();
        assert_eq!(pixoo.counter(), 7);
        assert_eq!(
            transport.command_names(),
            vec!["Channel/GetAllConf", "Draw/GetHttpGifId"]
        );
    }

    #[test]
    fn test_connect_resets_stale_counter() {
        let transport = ScriptedTransport::new(80);
        let pixoo = Pixoo::builder().connect(transport.clone()).unwrap();
        assert_eq!(pixoo.counter(), 1);
        assert_eq!(
            transport.command_names(),
            vec![
                "Channel/GetAllConf",
                "Draw/GetHttpGifId",
                "Draw/ResetHttpGifId"
            ]
        );
    }

    #[test]
    fn test_push_auto_captures_live_buffer() {
        let sink = RecordingSink::new();
        let mut pixoo = Pixoo::builder().size(16).simulated(sink.clone()).unwrap();

        pixoo.fill(palette::RED);
        pixoo.push().unwrap();
        pixoo.fill(palette::BLUE);
        pixoo.push().unwrap();

        let pushes = sink.pushes();
        assert_eq!(pushes.len(), 2);
        assert_eq!(pushes[0].pic_id, 2);
        assert_eq!(pushes[1].pic_id, 3);
        assert_eq!(pushes[0].frames.len(), 1);
        assert_eq!(pushes[0].frames[0].data(), &[255u8, 0, 0].repeat(256)[..]);
        assert_eq!(pushes[1].frames[0].data(), &[0u8, 0, 255].repeat(256)[..]);
        assert_eq!(pixoo.frame_count(), 0);
    }

    #[test]
    fn test_saved_frames_survive_push() {
        let sink = RecordingSink::new();
        let mut pixoo = Pixoo::builder().size(16).simulated(sink.clone()).unwrap();

        pixoo.fill(palette::GREEN);
        pixoo.save_frame();
        pixoo.clear();
        pixoo.save_frame();
        pixoo.push().unwrap();
        pixoo.push().unwrap();

        assert_eq!(pixoo.frame_count(), 2);
        let pushes = sink.pushes();
        assert_eq!(pushes[1].frames.len(), 2);
        assert_eq!(pushes[1].frames[0].data(), &[0u8, 255, 0].repeat(256)[..]);

        pixoo.clear_frames();
        assert_eq!(pixoo.frame_count(), 0);
    }

    #[test]
    fn test_push_counter_wraps_with_one_reset() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder()
            .size(16)
            .refresh_counter_limit(5)
            .connect(transport.clone())
            .unwrap();

        let issued: Vec<u32> = (0..4).map(|_| pixoo.push().unwrap()).collect();
        assert_eq!(issued, vec![2, 3, 4, 1]);

        let resets = transport
            .command_names()
            .iter()
            .filter(|name| name.as_str() == commands::RESET_ANIMATION_ID)
            .count();
        assert_eq!(resets, 1);
    }

    #[test]
    fn test_push_uses_options() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder().size(16).connect(transport.clone()).unwrap();

        pixoo
            .push_with(PushOptions {
                speed_ms: 250,
                lcd_index: 2,
            })
            .unwrap();

        let envelopes = transport.sent();
        let upload = envelopes.last().unwrap();
        assert_eq!(upload["Command"], "Draw/SendHttpGif");
        assert_eq!(upload["PicSpeed"], 250);
        assert_eq!(upload["LcdArray"], json!([0, 0, 1, 0, 0]));
    }

    #[test]
    fn test_pixoo16_switches_to_blank_channel_before_upload() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder()
            .model(DeviceModel::Pixoo16)
            .connect(transport.clone())
            .unwrap();

        pixoo.push().unwrap();

        let names = transport.command_names();
        assert_eq!(names[2], "Channel/SetIndex");
        assert_eq!(names[3], "Draw/SendHttpGif");
        let envelopes = transport.sent();
        assert_eq!(envelopes[2]["SelectIndex"], 4);
    }

    #[test]
    fn test_text_overlay_needs_capability() {
        let mut pixoo = Pixoo::builder()
            .model(DeviceModel::Pixoo16)
            .simulated(RecordingSink::new())
            .unwrap();

        let error = pixoo.send_text(&TextOverlay::new("hi")).unwrap_err();
        assert!(matches!(error, PixooError::Unsupported { .. }));
    }

    #[test]
    fn test_brightness_is_clamped() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder().connect(transport.clone()).unwrap();

        pixoo.set_brightness(255).unwrap();

        let envelopes = transport.sent();
        let envelope = envelopes.last().unwrap();
        assert_eq!(envelope["Command"], "Channel/SetBrightness");
        assert_eq!(envelope["Brightness"], 100);
    }

    #[test]
    fn test_tool_envelopes_clamp_and_map_arguments() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder().connect(transport.clone()).unwrap();

        pixoo.set_score_board(3, 1200).unwrap();
        pixoo.set_white_balance(Rgb::new(100, 150, 42)).unwrap();
        pixoo.play_net_gif("http://example.com/a.gif").unwrap();
        pixoo.clear_text().unwrap();

        let envelopes = transport.sent();
        let score = &envelopes[2];
        assert_eq!(score["Command"], "Tools/SetScoreBoard");
        assert_eq!(score["BlueScore"], 3);
        assert_eq!(score["RedScore"], 999);

        let balance = &envelopes[3];
        assert_eq!(balance["Command"], "Device/SetWhiteBalance");
        assert_eq!(balance["RValue"], 100);
        assert_eq!(balance["GValue"], 100);
        assert_eq!(balance["BValue"], 42);

        let gif = &envelopes[4];
        assert_eq!(gif["Command"], "Device/PlayTFGif");
        assert_eq!(gif["FileType"], 2);
        assert_eq!(gif["FileName"], "http://example.com/a.gif");

        assert_eq!(envelopes[5]["Command"], "Draw/ClearHttpText");
    }

    #[test]
    fn test_items_clear_after_successful_send() {
        let transport = ScriptedTransport::new(1);
        let mut pixoo = Pixoo::builder().connect(transport.clone()).unwrap();

        pixoo.add_item(OverlayItem::text("one"));
        pixoo.add_item(OverlayItem::text("two").identifier(2));
        pixoo.send_items().unwrap();

        assert_eq!(pixoo.item_count(), 0);
        let envelopes = transport.sent();
        let envelope = envelopes.last().unwrap();
        assert_eq!(envelope["Command"], "Draw/SendHttpItemList");
        assert_eq!(envelope["ItemList"].as_array().unwrap().len(), 2);
        assert_eq!(envelope["ItemList"][0]["TextString"], "one");
    }

    #[test]
    fn test_items_kept_when_send_fails() {
        let transport = ScriptedTransport::failing_on(1, commands::SEND_ITEM_LIST, 9);
        let mut pixoo = Pixoo::builder().connect(transport).unwrap();

        pixoo.add_item(OverlayItem::text("kept"));
        assert!(pixoo.send_items().is_err());
        assert_eq!(pixoo.item_count(), 1);
    }

    #[test]
    fn test_device_error_code_surfaces() {
        let transport = ScriptedTransport::failing_on(1, commands::SET_BRIGHTNESS, 5);
        let mut pixoo = Pixoo::builder().connect(transport).unwrap();

        let error = pixoo.set_brightness(50).unwrap_err();
        match error {
            PixooError::Protocol { command, code } => {
                assert_eq!(command, "Channel/SetBrightness");
                assert_eq!(code, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_simulated_device_commands_succeed_quietly() {
        let mut pixoo = Pixoo::builder().simulated(RecordingSink::new()).unwrap();
        pixoo.set_brightness(90).unwrap();
        pixoo.set_channel(Channel::Cloud).unwrap();
        pixoo.set_score_board(3, 1200).unwrap();
        pixoo.reboot().unwrap();
    }
}
