//! Local sinks for pushes that never leave the process.
//!
//! A client opened with [`crate::PixooBuilder::simulated`] hands every
//! push to a [`FrameSink`] instead of a transport. [`RecordingSink`]
//! captures them for inspection, which is how most tests observe what a
//! push would have sent.
//!
//! # Example
//!
//! ```
//! use pixoo_client::{Pixoo, RecordingSink};
//!
//! let sink = RecordingSink::new();
//! let mut pixoo = Pixoo::builder().simulated(sink.clone()).unwrap();
//! pixoo.fill(pixoo_client::palette::RED);
//! pixoo.push().unwrap();
//! assert_eq!(sink.push_count(), 1);
//! ```

use std::sync::{Arc, Mutex};

use crate::animation::Frame;
use crate::error::Result;

/// Receiver for pushes in simulated mode.
pub trait FrameSink {
    /// Accepts one push: the queued frames, the playback speed and the
    /// picture id the session assigned to the batch.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the error is surfaced by
    /// [`crate::Pixoo::push`] unchanged.
    fn display(&mut self, frames: &[Frame], speed_ms: u32, pic_id: u32) -> Result<()>;
}

/// One captured push.
#[derive(Debug, Clone)]
pub struct PushRecord {
    /// Frames in playback order.
    pub frames: Vec<Frame>,
    /// Per-frame playback time in milliseconds.
    pub speed_ms: u32,
    /// Picture id assigned by the session counter.
    pub pic_id: u32,
}

/// Sink that records every push it receives.
///
/// Cloning is cheap and clones share the same storage: keep one handle
/// for assertions and give the other to the client.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<PushRecord>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the pushes captured so far.
    pub fn pushes(&self) -> Vec<PushRecord> {
        self.records.lock().expect("sink lock").clone()
    }

    /// Number of pushes captured so far.
    pub fn push_count(&self) -> usize {
        self.records.lock().expect("sink lock").len()
    }

    /// Removes and returns all captured pushes.
    pub fn take(&self) -> Vec<PushRecord> {
        std::mem::take(&mut *self.records.lock().expect("sink lock"))
    }
}

impl FrameSink for RecordingSink {
    fn display(&mut self, frames: &[Frame], speed_ms: u32, pic_id: u32) -> Result<()> {
        self.records.lock().expect("sink lock").push(PushRecord {
            frames: frames.to_vec(),
            speed_ms,
            pic_id,
        });
        Ok(())
    }
}
