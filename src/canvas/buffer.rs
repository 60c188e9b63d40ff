//! Flat RGB pixel buffer backing all drawing operations.
//!
//! The buffer is a single `Vec<u8>` of `3 * size * size` bytes in row-major
//! pixel order, exactly the layout the device consumes. Out-of-range writes
//! are silently ignored (with a debug log) so callers can draw shapes that
//! hang off the display edge without bounds arithmetic of their own.

use bytes::Bytes;
use tracing::debug;

use crate::animation::Frame;
use crate::color::{palette, Rgb};
use crate::geometry::Point;

/// Square RGB drawing surface.
///
/// Channel values are `u8`, so every stored pixel is inside the range the
/// device accepts; there is no unclamped path into the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Edge length in pixels.
    size: u32,
    /// Row-major RGB bytes, always `3 * size * size` long.
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Creates a buffer of `size` by `size` pixels, filled black.
    pub fn new(size: u32) -> Self {
        let pixel_count = (size as usize) * (size as usize);
        Self {
            size,
            data: vec![0; pixel_count * 3],
        }
    }

    /// Edge length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of pixels on the surface.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Raw row-major RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Paints every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color.channels());
        }
    }

    /// Resets the surface to black.
    pub fn clear(&mut self) {
        self.fill(palette::BLACK);
    }

    /// Writes one pixel. Positions outside the surface are ignored.
    pub fn write_pixel(&mut self, position: Point, color: Rgb) {
        let Some(index) = self.index_of(position) else {
            let limit = self.size.saturating_sub(1);
            debug!(
                "Invalid coordinates given: ({}, {}) (maximum coordinates are ({}, {}))",
                position.x, position.y, limit, limit
            );
            return;
        };
        self.store(index, color);
    }

    /// Writes one pixel by flat row-major index. Indices past the end are
    /// ignored.
    pub fn write_pixel_at_index(&mut self, index: usize, color: Rgb) {
        if index >= self.pixel_count() {
            debug!(
                "Invalid index given: {} (maximum index is {})",
                index,
                self.pixel_count().saturating_sub(1)
            );
            return;
        }
        self.store(index, color);
    }

    /// Reads one pixel, `None` outside the surface.
    pub fn pixel_at(&self, position: Point) -> Option<Rgb> {
        let index = self.index_of(position)?;
        self.pixel_at_index(index)
    }

    /// Reads one pixel by flat index, `None` past the end.
    pub fn pixel_at_index(&self, index: usize) -> Option<Rgb> {
        if index >= self.pixel_count() {
            return None;
        }
        let offset = index * 3;
        Some(Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }

    /// Whether a position lands on the surface.
    #[inline]
    pub fn contains(&self, position: Point) -> bool {
        self.index_of(position).is_some()
    }

    /// Copies the current pixels into an immutable [`Frame`].
    pub fn snapshot(&self) -> Frame {
        Frame::new(self.size, Bytes::copy_from_slice(&self.data))
    }

    fn index_of(&self, position: Point) -> Option<usize> {
        let size = self.size as i32;
        if position.x < 0 || position.x >= size || position.y < 0 || position.y >= size {
            return None;
        }
        Some((position.x + position.y * size) as usize)
    }

    #[inline]
    fn store(&mut self, index: usize, color: Rgb) {
        let offset = index * 3;
        self.data[offset..offset + 3].copy_from_slice(&color.channels());
    }
}
