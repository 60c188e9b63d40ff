//! Simulated device - pushes rendered as ASCII art.
//!
//! This example demonstrates:
//! - Running without any device via a custom `FrameSink`
//! - Inspecting the frames a push would have sent
//!
//! # Running
//!
//! ```sh
//! cargo run --example simulate
//! ```

use pixoo_client::{palette, Frame, FrameSink, Pixoo, Result};

/// Sink that prints each pushed frame as ASCII art.
struct AsciiSink;

impl FrameSink for AsciiSink {
    fn display(&mut self, frames: &[Frame], speed_ms: u32, pic_id: u32) -> Result<()> {
        println!(
            "picture {pic_id}: {} frame(s) at {speed_ms} ms",
            frames.len()
        );
        for frame in frames {
            for y in 0..frame.size() {
                let row: String = (0..frame.size())
                    .map(|x| match frame.pixel_at(x, y) {
                        Some(color) if color != palette::BLACK => '#',
                        _ => '.',
                    })
                    .collect();
                println!("{row}");
            }
            println!();
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut pixoo = Pixoo::builder().size(16).simulated(AsciiSink)?;

    pixoo.draw_filled_rectangle((2, 2), (13, 13), palette::WHITE);
    pixoo.draw_line((0, 0), (15, 15), palette::RED);
    pixoo.push()?;

    Ok(())
}
