//! Drawing board - primitives and text on a real device.
//!
//! This example demonstrates:
//! - Connecting to a device by IP address
//! - Drawing shapes and text into the buffer
//! - Pushing the buffer and setting the brightness
//!
//! # Running
//!
//! ```sh
//! cargo run --example draw -- 192.168.1.40
//! ```

use pixoo_client::{palette, Font, Pixoo, Point, TextAlign, TextBox};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let address = std::env::args().nth(1).ok_or("usage: draw <device-ip>")?;

    // Connect with default settings (Pixoo64, 64x64)
    let mut pixoo = Pixoo::open(&address)?;

    pixoo.clear();
    pixoo.draw_filled_rectangle((0, 0), (63, 10), palette::BLUE);
    pixoo.draw_line((0, 12), (63, 12), palette::GRAY);
    pixoo.draw_text("pixoo", Point::new(2, 3), palette::WHITE, Font::tiny());
    pixoo.draw_text_boxed(
        "wrapped text stays inside the box",
        Point::new(2, 16),
        palette::YELLOW,
        Font::tiny(),
        TextBox::aligned(60, TextAlign::Left),
    );

    // Nothing reaches the device until the push
    pixoo.push()?;
    pixoo.set_brightness(80)?;

    Ok(())
}
