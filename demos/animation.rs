//! Animation - captured frames played back by the device.
//!
//! This example demonstrates:
//! - Capturing a frame sequence with `save_frame`
//! - Pushing the sequence as one animation with a per-frame speed
//!
//! # Running
//!
//! ```sh
//! cargo run --example animation -- 192.168.1.40
//! ```

use pixoo_client::{palette, Pixoo, PushOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let address = std::env::args()
        .nth(1)
        .ok_or("usage: animation <device-ip>")?;

    let mut pixoo = Pixoo::open(&address)?;
    let size = pixoo.size() as i32;

    // Two dots chasing each other along opposite edges
    for step in 0..16 {
        let x = step * size / 16;
        pixoo.clear();
        pixoo.draw_pixel((x, 0), palette::RED);
        pixoo.draw_pixel((size - 1 - x, size - 1), palette::CYAN);
        pixoo.save_frame();
    }

    let pic_id = pixoo.push_with(PushOptions {
        speed_ms: 120,
        lcd_index: 0,
    })?;
    println!("animation shipped as picture {pic_id}");

    Ok(())
}
