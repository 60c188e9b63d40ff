//! Error types for pixoo-client.

use thiserror::Error;

use crate::device::DeviceModel;

/// Main error type for all pixoo operations.
#[derive(Debug, Error)]
pub enum PixooError {
    /// HTTP error while talking to the device or the discovery endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The device answered with a non-zero error code.
    #[error("Device rejected {command} with error code {code}")]
    Protocol {
        /// Command name as sent on the wire.
        command: String,
        /// `error_code` field reported by the device.
        code: i64,
    },

    /// Operation not available on the connected device variant.
    #[error("{operation} is not supported on {model}")]
    Unsupported {
        /// Device variant that refused the operation.
        model: DeviceModel,
        /// Human-readable operation name.
        operation: &'static str,
    },

    /// LAN discovery finished without finding any device.
    #[error("No device found on the local network")]
    NoDeviceFound,

    /// Display size other than 16, 32 or 64.
    #[error("Invalid display size: {0} (expected 16, 32 or 64)")]
    InvalidSize(u32),

    /// Frame index outside the animation buffer.
    #[error("Frame index {index} out of range for buffer of {len} frames")]
    FrameIndex {
        /// Requested index.
        index: usize,
        /// Number of buffered frames.
        len: usize,
    },
}

/// Result type alias using PixooError.
pub type Result<T> = std::result::Result<T, PixooError>;
