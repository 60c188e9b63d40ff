//! Integration tests for pixoo-client.
//!
//! These tests drive whole flows through the public API, over an in-memory
//! transport or sink instead of a device.

use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use pixoo_client::{
    palette, Command, DeviceResponse, Font, Pixoo, Point, RecordingSink, Result, TextOverlay,
    Transport,
};

/// Transport double that records every envelope and always answers success;
/// the counter query is answered with `PicId: 1`.
#[derive(Clone, Default)]
struct MemoryTransport {
    sent: Arc<Mutex<Vec<Value>>>,
}

impl MemoryTransport {
    fn new() -> Self {
        Self::default()
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

impl Transport for MemoryTransport {
    fn request(&self, command: &Command) -> Result<DeviceResponse> {
        self.sent.lock().unwrap().push(command.to_json());
        let reply = if command.name() == "Draw/GetHttpGifId" {
            json!({ "error_code": 0, "PicId": 1 })
        } else {
            json!({ "error_code": 0 })
        };
        Ok(serde_json::from_value(reply).expect("scripted reply decodes"))
    }
}

/// Test that a drawing session produces a bit-exact upload envelope.
#[test]
fn test_draw_and_push_envelope() {
    let transport = MemoryTransport::new();
    let mut pixoo = Pixoo::builder()
        .size(16)
        .connect(transport.clone())
        .unwrap();

    pixoo.draw_pixel((1, 1), palette::RED);
    pixoo.draw_line((0, 0), (0, 3), palette::BLUE);
    pixoo.push().unwrap();

    let envelopes = transport.sent();
    let upload = envelopes.last().unwrap();
    assert_eq!(upload["Command"], "Draw/SendHttpGif");
    assert_eq!(upload["PicNum"], 1);
    assert_eq!(upload["PicWidth"], 16);
    assert_eq!(upload["PicOffset"], 0);
    assert_eq!(upload["PicID"], 2);
    assert_eq!(upload["PicSpeed"], 500);
    assert_eq!(upload["LcdArray"], json!([1, 0, 0, 0, 0]));

    let data = BASE64.decode(upload["PicData"].as_str().unwrap()).unwrap();
    assert_eq!(data.len(), 16 * 16 * 3);
    // (1, 1) is red: byte offset (1 + 1 * 16) * 3.
    assert_eq!(&data[51..54], &[255, 0, 0]);
    // The line covers (0, 0) through (0, 3).
    for y in 0..4 {
        let offset = (y * 16) * 3;
        assert_eq!(&data[offset..offset + 3], &[0, 0, 255]);
    }
    // An untouched pixel stays black.
    assert_eq!(&data[data.len() - 3..], &[0, 0, 0]);
}

/// Test that queued frames upload as one animation with counted offsets.
#[test]
fn test_animation_upload_sequence() {
    let transport = MemoryTransport::new();
    let mut pixoo = Pixoo::builder()
        .size(16)
        .connect(transport.clone())
        .unwrap();

    for color in [palette::RED, palette::GREEN, palette::BLUE] {
        pixoo.fill(color);
        pixoo.save_frame();
    }
    pixoo.push().unwrap();

    let envelopes = transport.sent();
    let uploads: Vec<&Value> = envelopes
        .iter()
        .filter(|envelope| envelope["Command"] == "Draw/SendHttpGif")
        .collect();
    assert_eq!(uploads.len(), 3);

    for (offset, upload) in uploads.iter().enumerate() {
        assert_eq!(upload["PicNum"], 3);
        assert_eq!(upload["PicOffset"], offset);
        assert_eq!(upload["PicID"], 2);
    }

    let first = BASE64.decode(uploads[0]["PicData"].as_str().unwrap()).unwrap();
    let last = BASE64.decode(uploads[2]["PicData"].as_str().unwrap()).unwrap();
    assert_eq!(&first[..3], &[255, 0, 0]);
    assert_eq!(&last[..3], &[0, 0, 255]);
}

/// Test the counter lifecycle: seed, advance, reset at the limit.
#[test]
fn test_counter_lifecycle_across_pushes() {
    let transport = MemoryTransport::new();
    let mut pixoo = Pixoo::builder()
        .size(16)
        .refresh_counter_limit(4)
        .connect(transport.clone())
        .unwrap();
    assert_eq!(pixoo.counter(), 1);

    let issued: Vec<u32> = (0..4).map(|_| pixoo.push().unwrap()).collect();
    assert_eq!(issued, vec![2, 3, 1, 2]);

    let names = transport.command_names();
    assert_eq!(names[0], "Channel/GetAllConf");
    assert_eq!(names[1], "Draw/GetHttpGifId");
    let resets = names
        .iter()
        .filter(|name| name.as_str() == "Draw/ResetHttpGifId")
        .count();
    assert_eq!(resets, 1);
}

/// Test the text overlay envelope produced by the builder.
#[test]
fn test_text_overlay_envelope() {
    let transport = MemoryTransport::new();
    let mut pixoo = Pixoo::builder().connect(transport.clone()).unwrap();

    let overlay = TextOverlay::new("hello")
        .position((2, 3))
        .color(palette::RED)
        .identifier(4)
        .width(32);
    pixoo.send_text(&overlay).unwrap();

    let envelopes = transport.sent();
    let envelope = envelopes.last().unwrap();
    assert_eq!(envelope["Command"], "Draw/SendHttpText");
    assert_eq!(envelope["TextId"], 4);
    assert_eq!(envelope["x"], 2);
    assert_eq!(envelope["y"], 3);
    assert_eq!(envelope["dir"], 0);
    assert_eq!(envelope["TextWidth"], 32);
    assert_eq!(envelope["TextString"], "hello");
    assert_eq!(envelope["color"], "#ff0000");
}

/// Test that a simulated session records frames instead of sending them.
#[test]
fn test_simulated_flow_records_frames() {
    let sink = RecordingSink::new();
    let mut pixoo = Pixoo::builder().size(16).simulated(sink.clone()).unwrap();

    pixoo.fill(palette::CYAN);
    pixoo.save_frame();
    pixoo.clear();
    pixoo.save_frame();
    pixoo.push().unwrap();

    let pushes = sink.pushes();
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0].pic_id, 2);
    assert_eq!(pushes[0].speed_ms, 500);
    assert_eq!(pushes[0].frames.len(), 2);
    assert_eq!(pushes[0].frames[0].pixel_at(5, 5), Some(palette::CYAN));
    assert_eq!(pushes[0].frames[1].pixel_at(5, 5), Some(palette::BLACK));
}

/// Test that facade drawing lands in the buffer, with clipping intact.
#[test]
fn test_facade_drawing_reaches_buffer() {
    let font = Font::new("dot", 1).with_glyph('x', 1, &[0b1]);
    let sink = RecordingSink::new();
    let mut pixoo = Pixoo::builder().size(16).simulated(sink).unwrap();

    pixoo.draw_character('x', Point::new(3, 4), palette::WHITE, &font);
    pixoo.draw_pixel((99, 99), palette::RED);

    assert_eq!(pixoo.buffer().pixel_at(Point::new(3, 4)), Some(palette::WHITE));
    assert_eq!(pixoo.buffer().as_bytes().len(), 16 * 16 * 3);
    assert_eq!(
        pixoo
            .buffer()
            .as_bytes()
            .iter()
            .filter(|byte| **byte != 0)
            .count(),
        3
    );
}
