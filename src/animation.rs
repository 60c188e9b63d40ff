//! Captured frames and the animation buffer behind `push`.
//!
//! A [`Frame`] is an immutable snapshot of the drawing surface; cloning one
//! is cheap because the pixel bytes live in a shared [`Bytes`] payload. The
//! [`AnimationBuffer`] collects frames in push order and survives a push:
//! frames stay buffered until [`AnimationBuffer::clear`] so the same
//! animation can be re-sent under a fresh picture id.

use bytes::Bytes;

use crate::color::Rgb;
use crate::error::{PixooError, Result};

/// One captured frame: an edge length plus row-major RGB bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: u32,
    data: Bytes,
}

impl Frame {
    pub(crate) fn new(size: u32, data: Bytes) -> Self {
        debug_assert_eq!(data.len(), (size as usize) * (size as usize) * 3);
        Self { size, data }
    }

    /// Edge length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw row-major RGB bytes, `3 * size * size` long.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads one pixel, `None` outside the frame.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let offset = ((x + y * self.size) * 3) as usize;
        Some(Rgb::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }
}

/// Ordered collection of frames awaiting a push.
#[derive(Debug, Clone, Default)]
pub struct AnimationBuffer {
    frames: Vec<Frame>,
}

impl AnimationBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffered frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Buffered frames in push order.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Appends a frame.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Replaces the frame at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PixooError::FrameIndex`] when `index` is past the end.
    pub fn replace(&mut self, index: usize, frame: Frame) -> Result<()> {
        let len = self.frames.len();
        let slot = self
            .frames
            .get_mut(index)
            .ok_or(PixooError::FrameIndex { index, len })?;
        *slot = frame;
        Ok(())
    }

    /// Drops all buffered frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
