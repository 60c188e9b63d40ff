//! Image compositing onto the frame buffer.
//!
//! Sources are abstracted behind [`ImageSource`] so callers can blit from
//! any pixel-addressable type; [`RasterImage`] is the owned implementation
//! used for generated art and for the output of resampling. Images larger
//! than the display are shrunk aspect-preserving before the blit, either by
//! plain fitting or by fitting onto a padded square canvas.

use tracing::debug;

use crate::color::{palette, Rgb};
use crate::geometry::Point;

use super::FrameBuffer;

/// Read-only pixel source for [`FrameBuffer::draw_image`].
pub trait ImageSource {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Pixel at `(x, y)`; callers stay within bounds.
    fn pixel_at(&self, x: u32, y: u32) -> Rgb;
}

/// Filtering used when an image is shrunk to fit the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleMode {
    /// Nearest neighbor; keeps pixel art crisp.
    #[default]
    PixelArt,
    /// Bilinear interpolation; smooths photographic content.
    Smooth,
}

/// Owned RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterImage {
    /// Creates a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![palette::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Builds an image by evaluating `pixel` at every coordinate.
    pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut image = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.pixels[(x + y * width) as usize] = pixel(x, y);
            }
        }
        image
    }

    /// Sets one pixel; coordinates outside the image are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(x + y * self.width) as usize] = color;
    }
}

impl ImageSource for RasterImage {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(x + y * self.width) as usize]
    }
}

impl FrameBuffer {
    /// Composites an image with its top-left corner at `origin`.
    ///
    /// A source wider or taller than the display is first shrunk to fit,
    /// preserving aspect ratio. With `pad` the shrunk image is centered on
    /// a black square of the display size before blitting, so the result
    /// always covers the full surface; without it the fitted image keeps
    /// its own dimensions. Pixels falling outside the display are clipped.
    pub fn draw_image(
        &mut self,
        image: &dyn ImageSource,
        origin: Point,
        mode: ResampleMode,
        pad: bool,
    ) {
        let bound = self.size();
        if image.width() > bound || image.height() > bound {
            let fitted = if pad {
                pad_to_square(image, bound, mode)
            } else {
                fit_within(image, bound, mode)
            };
            debug!(
                "Resized image to fit on screen (saving aspect ratio): ({}, {}) -> ({}, {})",
                image.width(),
                image.height(),
                fitted.width(),
                fitted.height()
            );
            self.blit(&fitted, origin);
        } else {
            self.blit(image, origin);
        }
    }

    fn blit(&mut self, image: &dyn ImageSource, origin: Point) {
        let size = self.size() as i32;
        for y in 0..image.height() {
            let placed_y = origin.y + y as i32;
            if placed_y < 0 || placed_y >= size {
                continue;
            }
            for x in 0..image.width() {
                let placed_x = origin.x + x as i32;
                if placed_x < 0 || placed_x >= size {
                    continue;
                }
                self.write_pixel(Point::new(placed_x, placed_y), image.pixel_at(x, y));
            }
        }
    }
}

/// Aspect-preserving target size with both edges at most `bound`. Rounds to
/// the nearest pixel but never below one.
fn fit_size(width: u32, height: u32, bound: u32) -> (u32, u32) {
    let scale = (f64::from(bound) / f64::from(width)).min(f64::from(bound) / f64::from(height));
    let fitted_width = ((f64::from(width) * scale).round() as u32).max(1);
    let fitted_height = ((f64::from(height) * scale).round() as u32).max(1);
    (fitted_width.min(bound), fitted_height.min(bound))
}

/// Shrinks `image` so both edges fit within `bound`, keeping aspect ratio.
fn fit_within(image: &dyn ImageSource, bound: u32, mode: ResampleMode) -> RasterImage {
    let (width, height) = fit_size(image.width(), image.height(), bound);
    resample(image, width, height, mode)
}

/// Shrinks `image` to fit and centers it on a black `bound` by `bound`
/// canvas.
fn pad_to_square(image: &dyn ImageSource, bound: u32, mode: ResampleMode) -> RasterImage {
    let fitted = fit_within(image, bound, mode);
    let offset_x = (bound - fitted.width()) / 2;
    let offset_y = (bound - fitted.height()) / 2;

    let mut canvas = RasterImage::new(bound, bound);
    for y in 0..fitted.height() {
        for x in 0..fitted.width() {
            canvas.set_pixel(offset_x + x, offset_y + y, fitted.pixel_at(x, y));
        }
    }
    canvas
}

fn resample(image: &dyn ImageSource, width: u32, height: u32, mode: ResampleMode) -> RasterImage {
    match mode {
        ResampleMode::PixelArt => resample_nearest(image, width, height),
        ResampleMode::Smooth => resample_bilinear(image, width, height),
    }
}

fn resample_nearest(image: &dyn ImageSource, width: u32, height: u32) -> RasterImage {
    let x_ratio = f64::from(image.width()) / f64::from(width);
    let y_ratio = f64::from(image.height()) / f64::from(height);
    RasterImage::from_fn(width, height, |x, y| {
        let source_x = (((f64::from(x) + 0.5) * x_ratio) as u32).min(image.width() - 1);
        let source_y = (((f64::from(y) + 0.5) * y_ratio) as u32).min(image.height() - 1);
        image.pixel_at(source_x, source_y)
    })
}

fn resample_bilinear(image: &dyn ImageSource, width: u32, height: u32) -> RasterImage {
    let x_ratio = f64::from(image.width()) / f64::from(width);
    let y_ratio = f64::from(image.height()) / f64::from(height);
    RasterImage::from_fn(width, height, |x, y| {
        let source_x = (f64::from(x) + 0.5) * x_ratio - 0.5;
        let source_y = (f64::from(y) + 0.5) * y_ratio - 0.5;
        bilinear_sample(image, source_x, source_y)
    })
}

fn bilinear_sample(image: &dyn ImageSource, x: f64, y: f64) -> Rgb {
    let x = x.clamp(0.0, f64::from(image.width() - 1));
    let y = y.clamp(0.0, f64::from(image.height() - 1));
    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(image.width() - 1);
    let y1 = (y0 + 1).min(image.height() - 1);
    let fx = x - f64::from(x0);
    let fy = y - f64::from(y0);

    let p00 = image.pixel_at(x0, y0);
    let p10 = image.pixel_at(x1, y0);
    let p01 = image.pixel_at(x0, y1);
    let p11 = image.pixel_at(x1, y1);

    let channel = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
        let top = f64::from(c00) * (1.0 - fx) + f64::from(c10) * fx;
        let bottom = f64::from(c01) * (1.0 - fx) + f64::from(c11) * fx;
        (top * (1.0 - fy) + bottom * fy).round() as u8
    };

    Rgb::new(
        channel(p00.r, p10.r, p01.r, p11.r),
        channel(p00.g, p10.g, p01.g, p11.g),
        channel(p00.b, p10.b, p01.b, p11.b),
    )
}
