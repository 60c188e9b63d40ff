//! Animation push assembly.
//!
//! A push uploads every buffered frame as its own `Draw/SendHttpGif`
//! envelope. All envelopes of one push share the picture id, playback
//! speed, frame count and LCD selection; only `PicOffset` and the base64
//! pixel payload differ per frame.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::animation::Frame;

use super::{commands, Command};

/// Number of individually addressable panels on multi-panel devices.
pub const LCD_PANEL_COUNT: usize = 5;

/// One-hot panel selection array. Indices past the last panel clamp to it.
pub fn lcd_array(lcd_index: u8) -> Vec<u8> {
    let index = (lcd_index as usize).min(LCD_PANEL_COUNT - 1);
    let mut array = vec![0u8; LCD_PANEL_COUNT];
    array[index] = 1;
    array
}

/// Builds the per-frame upload envelopes for one push.
pub fn animation_commands(
    frames: &[Frame],
    size: u32,
    pic_id: u32,
    speed_ms: u32,
    lcd_index: u8,
) -> Vec<Command> {
    let panel_selection = lcd_array(lcd_index);
    frames
        .iter()
        .enumerate()
        .map(|(offset, frame)| {
            Command::new(commands::SEND_ANIMATION_FRAME)
                .with("LcdArray", panel_selection.clone())
                .with("PicNum", frames.len() as u32)
                .with("PicWidth", size)
                .with("PicOffset", offset as u32)
                .with("PicID", pic_id)
                .with("PicSpeed", speed_ms)
                .with("PicData", BASE64.encode(frame.data()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::canvas::FrameBuffer;
    use crate::color::Rgb;

    fn tiny_frame(bytes: Vec<u8>) -> Frame {
        let mut buffer = FrameBuffer::new(2);
        for (index, chunk) in bytes.chunks_exact(3).enumerate() {
            buffer.write_pixel_at_index(index, Rgb::new(chunk[0], chunk[1], chunk[2]));
        }
        buffer.snapshot()
    }

    #[test]
    fn test_lcd_array_is_one_hot() {
        assert_eq!(lcd_array(0), vec![1, 0, 0, 0, 0]);
        assert_eq!(lcd_array(3), vec![0, 0, 0, 1, 0]);
        assert_eq!(lcd_array(4), vec![0, 0, 0, 0, 1]);
        // Out-of-range indices clamp to the last panel.
        assert_eq!(lcd_array(9), vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_single_frame_envelope_fields() {
        let frame = tiny_frame(vec![0; 12]);
        let commands_built = animation_commands(&[frame], 2, 5, 250, 0);

        assert_eq!(commands_built.len(), 1);
        let command = &commands_built[0];
        assert_eq!(command.name(), commands::SEND_ANIMATION_FRAME);
        assert_eq!(command.param("PicNum"), Some(&json!(1)));
        assert_eq!(command.param("PicWidth"), Some(&json!(2)));
        assert_eq!(command.param("PicOffset"), Some(&json!(0)));
        assert_eq!(command.param("PicID"), Some(&json!(5)));
        assert_eq!(command.param("PicSpeed"), Some(&json!(250)));
        assert_eq!(command.param("LcdArray"), Some(&json!([1, 0, 0, 0, 0])));
    }

    #[test]
    fn test_offsets_count_up_and_share_push_fields() {
        let frames = vec![
            tiny_frame(vec![1; 12]),
            tiny_frame(vec![2; 12]),
            tiny_frame(vec![3; 12]),
        ];
        let commands_built = animation_commands(&frames, 2, 9, 100, 1);

        assert_eq!(commands_built.len(), 3);
        for (offset, command) in commands_built.iter().enumerate() {
            assert_eq!(command.param("PicOffset"), Some(&json!(offset)));
            assert_eq!(command.param("PicNum"), Some(&json!(3)));
            assert_eq!(command.param("PicID"), Some(&json!(9)));
            assert_eq!(command.param("LcdArray"), Some(&json!([0, 1, 0, 0, 0])));
        }
    }

    #[test]
    fn test_pixel_data_is_base64_of_raw_bytes() {
        let bytes: Vec<u8> = (0u8..12).collect();
        let frame = tiny_frame(bytes.clone());
        let commands_built = animation_commands(&[frame], 2, 1, 500, 0);

        let encoded = commands_built[0]
            .param("PicData")
            .and_then(|value| value.as_str())
            .expect("PicData is a string");
        let decoded = BASE64.decode(encoded).unwrap();
        assert_eq!(decoded, bytes);
    }
}
