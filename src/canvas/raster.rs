//! Line and rectangle rasterization.

use std::collections::HashSet;

use crate::color::Rgb;
use crate::geometry::{lerp, round_position, step_count, Point};

use super::FrameBuffer;

impl FrameBuffer {
    /// Draws a straight line from `start` to `end`, both endpoints included.
    ///
    /// The line is sampled at Chebyshev-distance many steps, each sample
    /// rounded onto the grid, and duplicates dropped before writing, so a
    /// pixel is painted at most once per call. Coincident endpoints paint a
    /// single pixel.
    pub fn draw_line(&mut self, start: Point, end: Point, color: Rgb) {
        let steps = step_count(start, end);
        if steps == 0 {
            self.write_pixel(start, color);
            return;
        }

        let mut painted = HashSet::new();
        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            let position = round_position(lerp(start, end, t));
            if painted.insert(position) {
                self.write_pixel(position, color);
            }
        }
    }

    /// Fills the axis-aligned rectangle spanned by `top_left` and
    /// `bottom_right`, both corners included. Nothing is drawn when the
    /// corners are given in the wrong order.
    pub fn draw_filled_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Rgb) {
        for y in top_left.y..=bottom_right.y {
            for x in top_left.x..=bottom_right.x {
                self.write_pixel(Point::new(x, y), color);
            }
        }
    }
}
